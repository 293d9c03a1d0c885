//! 业务逻辑服务层

mod batch_committer;
mod import_service;
mod row_grouper;
mod zone_resolver;

pub use batch_committer::BatchCommitter;
pub use import_service::ImportService;
pub use row_grouper::{group_by_domain, parse_row};
pub use zone_resolver::{select_zone, strip_zone_prefix, ZoneResolver};

use std::sync::Arc;

use crate::traits::{HostedZoneApi, RowSource};
use crate::types::ImportSettings;

/// 服务上下文 - 持有所有依赖
///
/// 入口层需要创建此上下文，并注入具体的数据源和 DNS API 实现。
pub struct ServiceContext {
    /// CSV 数据源
    pub row_source: Arc<dyn RowSource>,
    /// Hosted zone API
    pub hosted_zone_api: Arc<dyn HostedZoneApi>,
    /// 运行参数
    pub settings: ImportSettings,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        row_source: Arc<dyn RowSource>,
        hosted_zone_api: Arc<dyn HostedZoneApi>,
        settings: ImportSettings,
    ) -> Self {
        Self {
            row_source,
            hosted_zone_api,
            settings,
        }
    }
}
