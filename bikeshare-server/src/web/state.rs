//! Per-operator router state.

use std::sync::Arc;

use crate::service::BikeShareService;

/// State for one operator's sub-router.
///
/// Each operator's routes get their own state value, so a handler never
/// needs to look up which operator it is serving. The facade behind the
/// `Arc` is immutable; requests share nothing mutable.
#[derive(Clone)]
pub struct OperatorState {
    pub service: Arc<BikeShareService>,
}
