use crate::config::{BaseImage, CommonConfig, DockerBuildConfig, Language};
use crate::platform::CloudProvider;

const PYTHON_VOLCENGINE_REGISTRY: &str = "agentkit-prod-public-cn-beijing.cr.volces.com";
const PYTHON_BYTEPLUS_REGISTRY: &str = "agentkit-prod-public-ap-southeast-1.cr.bytepluses.com";

const GO_BUILDER_IMAGE: &str = "agentkit-cn-beijing.cr.volces.com/base/compile_basego:1.24";
const GO_RUNTIME_IMAGE: &str = "agentkit-cn-beijing.cr.volces.com/base/runtime_basego:latest";

/// Images a generated Dockerfile starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseImages {
    Python { image: String },
    Golang { builder: String, runtime: String },
}

pub fn default_python_image(provider: CloudProvider, language_version: &str) -> String {
    let registry = match provider {
        CloudProvider::Volcengine => PYTHON_VOLCENGINE_REGISTRY,
        CloudProvider::Byteplus => PYTHON_BYTEPLUS_REGISTRY,
    };
    format!(
        "{}/base/py-simple:python{}-bookworm-slim-latest",
        registry, language_version
    )
}

/// Provider defaults, overridden by `docker_build.base_image`.
pub fn resolve(common: &CommonConfig, docker_build: &DockerBuildConfig, provider: CloudProvider) -> BaseImages {
    match common.language {
        Language::Python => {
            let image = match &docker_build.base_image {
                Some(BaseImage::Single(image)) if !image.trim().is_empty() => image.clone(),
                Some(BaseImage::Split { runtime: Some(image), .. }) if !image.trim().is_empty() => {
                    log::warn!("docker_build.base_image.runtime used as the Python base image");
                    image.clone()
                }
                _ => default_python_image(provider, &common.language_version),
            };
            BaseImages::Python { image }
        }
        Language::Golang => {
            let (builder, runtime) = match &docker_build.base_image {
                Some(BaseImage::Split { builder, runtime }) => (builder.clone(), runtime.clone()),
                // A single image is used for the runtime stage only
                Some(BaseImage::Single(image)) => (None, Some(image.clone())),
                None => (None, None),
            };
            BaseImages::Golang {
                builder: builder
                    .filter(|b| !b.trim().is_empty())
                    .unwrap_or_else(|| GO_BUILDER_IMAGE.to_string()),
                runtime: runtime
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| GO_RUNTIME_IMAGE.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_defaults_per_provider() {
        let common = CommonConfig::default();
        let build = DockerBuildConfig::default();

        assert_eq!(
            resolve(&common, &build, CloudProvider::Volcengine),
            BaseImages::Python {
                image: "agentkit-prod-public-cn-beijing.cr.volces.com/base/py-simple:python3.12-bookworm-slim-latest"
                    .to_string()
            }
        );
        match resolve(&common, &build, CloudProvider::Byteplus) {
            BaseImages::Python { image } => assert!(image.starts_with(PYTHON_BYTEPLUS_REGISTRY)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_python_override() {
        let common = CommonConfig::default();
        let build = DockerBuildConfig {
            base_image: Some(BaseImage::Single("python:3.12-slim".to_string())),
            ..Default::default()
        };
        assert_eq!(
            resolve(&common, &build, CloudProvider::Volcengine),
            BaseImages::Python {
                image: "python:3.12-slim".to_string()
            }
        );
    }

    #[test]
    fn test_golang_partial_override() {
        let mut common = CommonConfig::default();
        common.set_language(Language::Golang);
        let build = DockerBuildConfig {
            base_image: Some(BaseImage::Split {
                builder: Some("golang:1.24".to_string()),
                runtime: None,
            }),
            ..Default::default()
        };
        assert_eq!(
            resolve(&common, &build, CloudProvider::Volcengine),
            BaseImages::Golang {
                builder: "golang:1.24".to_string(),
                runtime: GO_RUNTIME_IMAGE.to_string(),
            }
        );
    }
}
