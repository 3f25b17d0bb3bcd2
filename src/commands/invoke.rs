use super::helpers::{self, GlobalOptions};
use crate::cli::InvokeFlags;
use crate::error::Result;
use crate::lifecycle::InvokeRequest;
use crate::project::Project;

impl From<&InvokeFlags> for InvokeRequest {
    fn from(flags: &InvokeFlags) -> Self {
        InvokeRequest {
            message: flags.message.clone(),
            payload: flags.payload.clone(),
            headers: flags.headers.clone(),
            apikey: flags.apikey.clone(),
        }
    }
}

pub fn execute(project: &Project, flags: &InvokeFlags, options: &GlobalOptions) -> Result<()> {
    let lc = helpers::lifecycle(project, options)?;
    lc.invoke(&InvokeRequest::from(flags))
}
