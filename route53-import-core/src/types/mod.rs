//! 类型定义模块

mod change_request;
mod domain_group;
mod event;
mod result;
mod settings;

pub use change_request::{
    ChangeAction, ChangeRequest, ChangeRequestBuilder, RecordType, ZoneVisibility, DEFAULT_TTL,
};
pub use domain_group::DomainGroup;
pub use event::{correlation_id, ImportEvent, ObjectLocator};
pub use result::{PipelineResult, ERROR_STATE, SUCCESS_STATE};
pub use settings::{ImportSettings, DEFAULT_SETTLE_DELAY, DEFAULT_ZONE_LOOKUP_LIMIT};

// Re-export provider 库的公共类型
pub use route53_import_provider::{Change, ChangeInfo, HostedZone};
