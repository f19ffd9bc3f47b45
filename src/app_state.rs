use std::sync::Arc;

use crate::service::validator_factory::ValidatorFactory;

/// 应用状态
/// 包含所有共享资源
#[derive(Clone)]
pub struct AppState {
    pub factory: Arc<ValidatorFactory>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(factory: ValidatorFactory) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }
}
