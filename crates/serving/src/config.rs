use {
    crate::{ServingError, TagKind},
    serde::Deserialize,
    std::{
        collections::BTreeMap,
        path::{Path, PathBuf},
    },
};

/// Which version of a servable a session binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServableVersion {
    /// Whatever the backend considers current.
    #[default]
    Default,
    Specific(u32),
}

impl ServableVersion {
    /// Numeric form used by the backend, where 0 means default.
    pub fn as_u32(&self) -> u32 {
        match self {
            ServableVersion::Default => 0,
            ServableVersion::Specific(version) => *version,
        }
    }
}

/// Parses a servable version string.
///
/// Whitespace anywhere is ignored and the leading digits are read, after at
/// most one `+`. A negative sign, a missing number, a value that does not fit
/// in 32 bits, or zero all select the default version.
pub fn parse_servable_version(input: &str) -> ServableVersion {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.starts_with('-') {
        return ServableVersion::Default;
    }
    let unsigned = compact.strip_prefix('+').unwrap_or(&compact);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    let parsed = digits.parse::<u64>().ok();
    match parsed.and_then(|v| u32::try_from(v).ok()) {
        Some(0) | None => ServableVersion::Default,
        Some(version) => ServableVersion::Specific(version),
    }
}

/// Options of the session-producing node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionOptions {
    pub servable_name: String,
    #[serde(default)]
    pub servable_version: Option<String>,
    /// Server configuration file. When set, the server is started from it if
    /// nobody in this process has started one yet.
    #[serde(default)]
    pub server_config: Option<PathBuf>,
}

impl SessionOptions {
    pub fn new(servable_name: impl Into<String>) -> Self {
        Self {
            servable_name: servable_name.into(),
            servable_version: None,
            server_config: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.servable_version = Some(version.into());
        self
    }

    pub fn with_server_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.server_config = Some(path.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ServingError> {
        let options: SessionOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServingError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ServingError> {
        if self.servable_name.is_empty() {
            return Err(ServingError::Config("servable name is empty".to_string()));
        }
        Ok(())
    }

    pub fn version(&self) -> ServableVersion {
        self.servable_version
            .as_deref()
            .map(parse_servable_version)
            .unwrap_or_default()
    }

    /// The configured server config path, ignoring an empty one.
    pub fn bootstrap_config(&self) -> Option<&Path> {
        self.server_config
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Options of the inference node.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct InferenceOptions {
    /// Tag to inference input name. Tags without an entry are used as names.
    pub tag_to_input_tensor_names: BTreeMap<String, String>,
    /// Tag to inference output name. Tags without an entry are used as names.
    pub tag_to_output_tensor_names: BTreeMap<String, String>,
    /// Input names for the tensors of a vector input, by position.
    pub input_order_list: Vec<String>,
    /// Output names emitted on a vector output, in order.
    pub output_order_list: Vec<String>,
    /// Explicit tag kinds, overriding prefix classification.
    pub tag_kinds: BTreeMap<String, TagKind>,
}

impl InferenceOptions {
    pub fn from_json(json: &str) -> Result<Self, ServingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServingError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn input_name<'a>(&'a self, tag: &'a str) -> &'a str {
        self.tag_to_input_tensor_names
            .get(tag)
            .map(String::as_str)
            .unwrap_or(tag)
    }

    pub fn output_name<'a>(&'a self, tag: &'a str) -> &'a str {
        self.tag_to_output_tensor_names
            .get(tag)
            .map(String::as_str)
            .unwrap_or(tag)
    }
}
