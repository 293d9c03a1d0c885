//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use route53_import_provider::{ProviderError, Result as ProviderResult};
use tokio::sync::RwLock;

use crate::error::SourceError;
use crate::services::ServiceContext;
use crate::traits::{HostedZoneApi, RowSource};
use crate::types::{Change, ChangeInfo, ChangeRequest, HostedZone, ImportSettings, ObjectLocator};

// ===== MockRowSource =====

pub struct MockRowSource {
    objects: RwLock<HashMap<ObjectLocator, Vec<u8>>>,
    /// 如果 Some，fetch 时返回此错误
    fetch_error: RwLock<Option<ProviderError>>,
    fetch_count: AtomicUsize,
}

impl MockRowSource {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            fetch_error: RwLock::new(None),
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// 预置一个对象
    pub fn with_object(self, container: &str, key: &str, body: &[u8]) -> Self {
        self.objects
            .try_write()
            .unwrap()
            .insert(ObjectLocator::new(container, key), body.to_vec());
        self
    }

    pub async fn set_fetch_error(&self, err: Option<ProviderError>) {
        *self.fetch_error.write().await = err;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RowSource for MockRowSource {
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, SourceError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fetch_error.read().await.clone() {
            return Err(SourceError::Provider(err));
        }
        self.objects
            .read()
            .await
            .get(locator)
            .cloned()
            .ok_or_else(|| {
                SourceError::Provider(ProviderError::ObjectNotFound {
                    provider: "mock".to_string(),
                    bucket: locator.container.clone(),
                    key: locator.key.clone(),
                    raw_message: None,
                })
            })
    }
}

// ===== MockHostedZoneApi =====

/// Recording hosted zone API.
///
/// Lists behave like `ListHostedZonesByName`: zones sorted by name, starting at
/// the queried name, truncated to `max_items`. Successful commits return
/// `CHG1`, `CHG2`, … in order.
pub struct MockHostedZoneApi {
    zones: RwLock<Vec<HostedZone>>,
    list_error: RwLock<Option<ProviderError>>,
    commit_error: RwLock<Option<ProviderError>>,
    /// zone id -> 该 zone 的提交错误
    commit_errors_by_zone: RwLock<HashMap<String, ProviderError>>,
    list_calls: RwLock<Vec<(String, u32)>>,
    commits: RwLock<Vec<(String, Vec<Change>)>>,
    commit_counter: AtomicUsize,
    panic_on_list: AtomicBool,
}

impl MockHostedZoneApi {
    pub fn new() -> Self {
        Self::with_zones(Vec::new())
    }

    pub fn with_zones(zones: Vec<HostedZone>) -> Self {
        Self {
            zones: RwLock::new(zones),
            list_error: RwLock::new(None),
            commit_error: RwLock::new(None),
            commit_errors_by_zone: RwLock::new(HashMap::new()),
            list_calls: RwLock::new(Vec::new()),
            commits: RwLock::new(Vec::new()),
            commit_counter: AtomicUsize::new(0),
            panic_on_list: AtomicBool::new(false),
        }
    }

    pub async fn set_list_error(&self, err: Option<ProviderError>) {
        *self.list_error.write().await = err;
    }

    pub async fn set_commit_error(&self, err: Option<ProviderError>) {
        *self.commit_error.write().await = err;
    }

    pub async fn fail_commits_for_zone(&self, zone_id: &str, err: ProviderError) {
        self.commit_errors_by_zone
            .write()
            .await
            .insert(zone_id.to_string(), err);
    }

    pub fn set_panic_on_list(&self, panic: bool) {
        self.panic_on_list.store(panic, Ordering::SeqCst);
    }

    pub async fn list_calls(&self) -> Vec<(String, u32)> {
        self.list_calls.read().await.clone()
    }

    /// 已接受的提交：(zone id, changes)
    pub async fn commits(&self) -> Vec<(String, Vec<Change>)> {
        self.commits.read().await.clone()
    }
}

#[async_trait]
impl HostedZoneApi for MockHostedZoneApi {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_hosted_zones_by_name(
        &self,
        dns_name: &str,
        max_items: u32,
    ) -> ProviderResult<Vec<HostedZone>> {
        self.list_calls
            .write()
            .await
            .push((dns_name.to_string(), max_items));

        assert!(
            !self.panic_on_list.load(Ordering::SeqCst),
            "mock list_hosted_zones_by_name panicked"
        );

        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }

        let mut zones = self.zones.read().await.clone();
        zones.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(zones
            .into_iter()
            .filter(|z| z.name.as_str() >= dns_name)
            .take(max_items as usize)
            .collect())
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        changes: &[Change],
    ) -> ProviderResult<ChangeInfo> {
        if let Some(err) = self.commit_error.read().await.clone() {
            return Err(err);
        }
        if let Some(err) = self.commit_errors_by_zone.read().await.get(zone_id).cloned() {
            return Err(err);
        }

        self.commits
            .write()
            .await
            .push((zone_id.to_string(), changes.to_vec()));
        let n = self.commit_counter.fetch_add(1, Ordering::SeqCst) + 1;

        Ok(ChangeInfo {
            id: format!("CHG{n}"),
            status: "PENDING".to_string(),
            submitted_at: None,
        })
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`（无 settle delay）
pub fn create_test_context(
    api: MockHostedZoneApi,
) -> (
    Arc<ServiceContext>,
    Arc<MockRowSource>,
    Arc<MockHostedZoneApi>,
) {
    create_test_context_with(
        MockRowSource::new(),
        api,
        ImportSettings {
            settle_delay: Duration::ZERO,
            ..ImportSettings::default()
        },
    )
}

/// 创建测试用 `ServiceContext`，自定义数据源与参数
pub fn create_test_context_with(
    source: MockRowSource,
    api: MockHostedZoneApi,
    settings: ImportSettings,
) -> (
    Arc<ServiceContext>,
    Arc<MockRowSource>,
    Arc<MockHostedZoneApi>,
) {
    let source = Arc::new(source);
    let api = Arc::new(api);
    let ctx = Arc::new(ServiceContext::new(source.clone(), api.clone(), settings));
    (ctx, source, api)
}

/// 构造一个 hosted zone 描述
pub fn zone(id: &str, name: &str, private_zone: bool) -> HostedZone {
    HostedZone {
        id: id.to_string(),
        name: name.to_string(),
        private_zone,
    }
}

/// 构造一个单值的 `ChangeRequest`
pub fn request(
    action: &str,
    domain: &str,
    name: &str,
    record_type: &str,
    value: &str,
) -> ChangeRequest {
    ChangeRequest::builder(action, domain, name, record_type)
        .value(value)
        .build()
}
