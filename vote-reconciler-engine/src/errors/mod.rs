mod reconciler;

pub use reconciler::ReconcilerError;
