//! Route 53 integration test
//!
//! Operation mode:
//! ```bash
//! AWS_ACCESS_KEY_ID=xxx AWS_SECRET_ACCESS_KEY=xxx TEST_DOMAIN=example.com \
//!     cargo test -p route53-import-provider --test route53_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name, txt_change};
use route53_import_provider::ProviderError;

// ============ Basic Test ============

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_DOMAIN"]
async fn test_route53_list_hosted_zones_by_name() {
    skip_if_no_credentials!("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::route53(), "创建测试上下文失败");
    let zones = require_ok!(
        ctx.api.list_hosted_zones_by_name(&ctx.domain, 2).await,
        "list_hosted_zones_by_name 调用失败"
    );
    assert!(!zones.is_empty(), "hosted zone 列表不应为空");
    assert!(zones.len() <= 2, "返回数量不应超过 maxitems");

    println!("✓ list_hosted_zones_by_name 测试通过，共 {} 个", zones.len());
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_DOMAIN"]
async fn test_route53_upsert_then_delete() {
    skip_if_no_credentials!("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::route53(), "创建测试上下文失败");
    let zone_id = require_some!(ctx.find_zone_id().await, "找不到测试 hosted zone");
    let name = generate_test_record_name(&ctx.domain);

    let info = require_ok!(
        ctx.api
            .change_resource_record_sets(&zone_id, &[txt_change("UPSERT", &name, "integration-test")])
            .await,
        "UPSERT 提交失败"
    );
    assert!(!info.id.is_empty(), "change id 不应为空");

    let info = require_ok!(
        ctx.api
            .change_resource_record_sets(&zone_id, &[txt_change("DELETE", &name, "integration-test")])
            .await,
        "DELETE 提交失败"
    );
    println!("✓ upsert/delete 测试通过: {} ({})", info.id, info.status);
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_DOMAIN"]
async fn test_route53_rejected_batch_is_atomic() {
    skip_if_no_credentials!("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::route53(), "创建测试上下文失败");
    let zone_id = require_some!(ctx.find_zone_id().await, "找不到测试 hosted zone");
    let name = generate_test_record_name(&ctx.domain);

    // Second change deletes a record that does not exist, so nothing is applied.
    let result = ctx
        .api
        .change_resource_record_sets(
            &zone_id,
            &[
                txt_change("UPSERT", &name, "should-not-exist"),
                txt_change("DELETE", &format!("missing-{name}"), "nothing"),
            ],
        )
        .await;
    assert!(
        matches!(result, Err(ProviderError::InvalidChangeBatch { .. })),
        "expected InvalidChangeBatch, got {result:?}"
    );

    println!("✓ rejected batch 测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY"]
async fn test_route53_unknown_zone() {
    skip_if_no_credentials!("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::route53(), "创建测试上下文失败");
    let result = ctx
        .api
        .change_resource_record_sets(
            "Z0000000000000000000",
            &[txt_change("UPSERT", "x.example.com", "x")],
        )
        .await;
    assert!(
        matches!(result, Err(ProviderError::HostedZoneNotFound { .. })),
        "expected HostedZoneNotFound, got {result:?}"
    );
}
