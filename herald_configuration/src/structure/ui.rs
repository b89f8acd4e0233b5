use serde::Deserialize;

use crate::traits::ResolvableConfiguration;

#[derive(Clone, Debug)]
pub struct UiConfiguration {
    pub coloured_output: bool,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub(crate) struct UnresolvedUiConfiguration {
    coloured_output: bool,
}

impl Default for UnresolvedUiConfiguration {
    fn default() -> Self {
        Self {
            coloured_output: true,
        }
    }
}

impl ResolvableConfiguration for UnresolvedUiConfiguration {
    type Resolved = UiConfiguration;

    fn resolve(self) -> miette::Result<Self::Resolved> {
        Ok(UiConfiguration {
            coloured_output: self.coloured_output,
        })
    }
}
