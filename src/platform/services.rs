use super::global_config::RegionRules;
use super::provider::CloudProvider;
use crate::error::{AgentkitError, Result};
use std::collections::BTreeMap;

/// Static description of one OpenAPI service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMeta {
    pub key: &'static str,
    pub code: &'static str,
    pub host_template: &'static str,
    pub default_version: &'static str,
    pub scheme: &'static str,
}

const SERVICES: &[ServiceMeta] = &[
    ServiceMeta {
        key: "agentkit",
        code: "agentkit",
        host_template: "open.volcengineapi.com",
        default_version: "2025-10-30",
        scheme: "https",
    },
    ServiceMeta {
        key: "iam",
        code: "iam",
        host_template: "open.volcengineapi.com",
        default_version: "2018-01-01",
        scheme: "https",
    },
    ServiceMeta {
        key: "sts",
        code: "sts",
        host_template: "sts.volcengineapi.com",
        default_version: "2018-01-01",
        scheme: "https",
    },
    ServiceMeta {
        key: "identity",
        code: "cis_test",
        host_template: "open.volcengineapi.com",
        default_version: "2023-10-01",
        scheme: "https",
    },
    ServiceMeta {
        key: "cr",
        code: "cr",
        host_template: "cr.{region}.volcengineapi.com",
        default_version: "2022-05-12",
        scheme: "https",
    },
    ServiceMeta {
        key: "tos",
        code: "tos",
        host_template: "tos-{region}.volces.com",
        default_version: "",
        scheme: "https",
    },
    ServiceMeta {
        key: "cp",
        code: "CP",
        host_template: "open.volcengineapi.com",
        default_version: "2023-05-01",
        scheme: "https",
    },
];

/// Case-insensitive lookup by service key.
pub fn lookup(key: &str) -> Result<&'static ServiceMeta> {
    let wanted = key.trim().to_lowercase();
    SERVICES
        .iter()
        .find(|meta| meta.key == wanted)
        .ok_or_else(|| AgentkitError::UnsupportedService(key.to_string()))
}

pub fn all() -> &'static [ServiceMeta] {
    SERVICES
}

/// Default host of `meta` in `region` for the given provider.
pub fn default_host(provider: CloudProvider, meta: &ServiceMeta, region: &str) -> String {
    match provider {
        CloudProvider::Volcengine => meta.host_template.replace("{region}", region),
        CloudProvider::Byteplus => format!("{}.{}.byteplusapi.com", meta.key, region),
    }
}

/// Built-in region remapping for services that are not deployed everywhere.
pub fn builtin_region_rules(provider: CloudProvider) -> RegionRules {
    let mut rules = RegionRules::new();
    if provider == CloudProvider::Volcengine {
        let mut shanghai = BTreeMap::new();
        shanghai.insert("cp".to_string(), "cn-beijing".to_string());
        shanghai.insert("tos".to_string(), "cn-beijing".to_string());
        rules.insert("cn-shanghai".to_string(), shanghai);
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("CR").unwrap().code, "cr");
        assert_eq!(lookup("identity").unwrap().code, "cis_test");
        assert_eq!(lookup("cp").unwrap().code, "CP");
    }

    #[test]
    fn test_unknown_service() {
        let err = lookup("s3").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported service: s3");
    }

    #[test]
    fn test_default_hosts() {
        let cr = lookup("cr").unwrap();
        assert_eq!(
            default_host(CloudProvider::Volcengine, cr, "cn-shanghai"),
            "cr.cn-shanghai.volcengineapi.com"
        );
        assert_eq!(
            default_host(CloudProvider::Byteplus, cr, "us-east-1"),
            "cr.us-east-1.byteplusapi.com"
        );
        let agentkit = lookup("agentkit").unwrap();
        assert_eq!(
            default_host(CloudProvider::Volcengine, agentkit, "cn-beijing"),
            "open.volcengineapi.com"
        );
        assert_eq!(
            default_host(CloudProvider::Byteplus, agentkit, "ap-southeast-1"),
            "agentkit.ap-southeast-1.byteplusapi.com"
        );
    }

    #[test]
    fn test_builtin_rules() {
        let rules = builtin_region_rules(CloudProvider::Volcengine);
        assert_eq!(rules["cn-shanghai"]["tos"], "cn-beijing");
        assert!(builtin_region_rules(CloudProvider::Byteplus).is_empty());
    }
}
