//! Inspection settings loaded via `OrthoConfig`.

use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::bsky::{ResponseKind, UnknownResponseKind};
use crate::decode::DecodeOptions;
use crate::inspect::error::InspectError;

/// Settings for `lexicon-inspect`, from CLI flags, `LEXICON_INSPECT_*`
/// environment variables or a configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LEXICON_INSPECT")]
pub struct InspectSettings {
    /// Saved response body to decode.
    pub input: Option<PathBuf>,
    /// Response kind name, for example `lists`.
    #[ortho_config(default = "actor-starter-packs".to_owned())]
    pub response: String,
    /// Nesting bound override.
    pub max_depth: Option<usize>,
}

impl InspectSettings {
    /// Loads settings from `args` (program name first), the environment and
    /// configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`InspectError::Config`] when a layer fails to parse.
    pub fn load_with_args<I>(args: I) -> Result<Self, InspectError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|err| InspectError::Config {
            message: err.to_string(),
        })
    }

    /// Returns the configured input path.
    ///
    /// # Errors
    ///
    /// Returns [`InspectError::MissingInput`] when none was given.
    pub fn input(&self) -> Result<&Path, InspectError> {
        self.input.as_deref().ok_or(InspectError::MissingInput)
    }

    /// Returns the configured response kind.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownResponseKind`] for an unsupported name.
    pub fn response_kind(&self) -> Result<ResponseKind, UnknownResponseKind> {
        self.response.parse()
    }

    /// Returns decoder options with the depth override applied.
    #[must_use]
    pub fn decode_options(&self) -> DecodeOptions {
        let options = DecodeOptions::default();
        self.max_depth
            .map_or(options, |depth| options.with_max_depth(depth))
    }
}
