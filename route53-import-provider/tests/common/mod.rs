//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use route53_import_provider::{
    AwsCredentials, Change, HostedZoneApi, ObjectStorage, ResourceRecord, ResourceRecordSet,
    create_hosted_zone_api, create_object_storage,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 从环境变量读取 AWS 凭证
pub fn credentials_from_env() -> Option<AwsCredentials> {
    let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
    let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
    let session_token = env::var("AWS_SESSION_TOKEN").ok();
    Some(AwsCredentials::new(
        access_key_id,
        secret_access_key,
        session_token,
    ))
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name(domain: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    format!("_test-{stamp}.{domain}")
}

/// 构造单个 TXT 变更
pub fn txt_change(action: &str, name: &str, text: &str) -> Change {
    Change {
        action: action.to_string(),
        resource_record_set: ResourceRecordSet {
            name: name.to_string(),
            record_type: "TXT".to_string(),
            ttl: 60,
            resource_records: vec![ResourceRecord {
                value: vec![format!("\"{text}\"")],
            }],
        },
    }
}

/// 测试上下文 - 封装 Route 53 客户端和测试 hosted zone
pub struct TestContext {
    pub api: Arc<dyn HostedZoneApi>,
    pub domain: String,
}

impl TestContext {
    /// 创建 Route 53 测试上下文
    pub fn route53() -> Option<Self> {
        let credentials = credentials_from_env()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        Some(Self {
            api: create_hosted_zone_api(credentials),
            domain,
        })
    }

    /// 查找测试域名的 hosted zone id
    pub async fn find_zone_id(&self) -> Option<String> {
        let zones = self
            .api
            .list_hosted_zones_by_name(&self.domain, 2)
            .await
            .ok()?;
        let wanted = format!("{}.", self.domain.trim_end_matches('.'));
        zones
            .into_iter()
            .find(|z| z.name == wanted && !z.private_zone)
            .map(|z| z.id)
    }
}

/// S3 测试上下文
pub struct StorageContext {
    pub storage: Arc<dyn ObjectStorage>,
    pub bucket: String,
    pub key: String,
}

impl StorageContext {
    /// 创建 S3 测试上下文
    pub fn s3() -> Option<Self> {
        let credentials = credentials_from_env()?;
        let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let bucket = env::var("TEST_BUCKET").ok()?;
        let key = env::var("TEST_KEY").ok()?;

        Some(Self {
            storage: create_object_storage(credentials, region),
            bucket,
            key,
        })
    }
}
