use clap::Parser;

/// Flags for `init`.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitFlags {
    /// Agent name (default: project directory name)
    pub name: Option<String>,

    /// Python or Golang
    #[arg(long)]
    pub language: Option<String>,

    /// Entry point file (default: agent.py, or main.go for Golang)
    #[arg(long = "entry-point")]
    pub entry_point: Option<String>,

    /// local, hybrid or cloud
    #[arg(long = "launch-type")]
    pub launch_type: Option<String>,

    /// Agent type, e.g. "Basic App" or "A2A App"
    #[arg(long = "agent-type")]
    pub agent_type: Option<String>,

    /// Overwrite an existing agentkit.yaml
    #[arg(long)]
    pub force: bool,
}

/// Flags shared by `build` and `launch`.
#[derive(Parser, Debug, Clone, Default)]
pub struct BuildFlags {
    /// Regenerate the Dockerfile even if it was edited by hand
    #[arg(long = "regenerate-dockerfile")]
    pub regenerate_dockerfile: bool,

    /// Target platform, e.g. linux/amd64
    #[arg(long)]
    pub platform: Option<String>,
}

/// Flags for `invoke`.
#[derive(Parser, Debug, Clone, Default)]
pub struct InvokeFlags {
    /// Prompt sent as {"prompt": MESSAGE}
    #[arg(conflicts_with = "payload")]
    pub message: Option<String>,

    /// Raw JSON payload
    #[arg(long)]
    pub payload: Option<String>,

    /// Extra headers as a JSON object
    #[arg(long)]
    pub headers: Option<String>,

    /// API key, overriding the one recorded at deploy
    #[arg(long)]
    pub apikey: Option<String>,
}
