use super::helpers::{self, GlobalOptions};
use crate::error::Result;
use crate::lifecycle::StatusReport;
use crate::project::Project;

fn render(agent_name: &str, report: &StatusReport) -> String {
    let mut lines = vec![
        format!("Agent:       {}", agent_name),
        format!("Launch type: {}", report.launch_type),
        format!("State:       {}", report.state),
    ];
    if let Some(endpoint) = &report.endpoint {
        lines.push(format!("Endpoint:    {}", endpoint));
    }
    if !report.details.is_empty() {
        lines.push(String::new());
        let width = report.details.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (key, value) in &report.details {
            lines.push(format!("  {:width$}  {}", key, value, width = width));
        }
    }
    lines.join("\n")
}

pub fn execute(project: &Project, options: &GlobalOptions) -> Result<()> {
    let lc = helpers::lifecycle(project, options)?;
    let report = lc.status()?;
    println!("{}", render(&lc.config().config.common.agent_name, &report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let report = StatusReport {
            launch_type: "local".to_string(),
            state: "running".to_string(),
            endpoint: Some("http://localhost:8000".to_string()),
            details: vec![
                ("container".to_string(), "demo-container".to_string()),
                ("image_id".to_string(), "sha256:abc".to_string()),
            ],
        };
        let text = render("demo", &report);
        assert!(text.contains("State:       running"));
        assert!(text.contains("Endpoint:    http://localhost:8000"));
        assert!(text.contains("  container  demo-container"));
        assert!(text.contains("  image_id   sha256:abc"));
    }

    #[test]
    fn test_render_without_endpoint() {
        let report = StatusReport {
            launch_type: "hybrid".to_string(),
            state: "not_deployed".to_string(),
            ..Default::default()
        };
        assert!(!render("demo", &report).contains("Endpoint"));
    }
}
