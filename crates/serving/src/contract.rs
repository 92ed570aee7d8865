use {
    crate::{InferenceOptions, Packet, ServingError, TagKind, classify},
    std::collections::BTreeMap,
};

/// Tag kinds of a node's streams, fixed when the node is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    inputs: BTreeMap<String, TagKind>,
    outputs: BTreeMap<String, TagKind>,
}

impl Contract {
    /// Resolves every declared tag once. An explicit kind in the options wins
    /// over the tag prefix.
    pub fn resolve<I, O>(
        input_tags: I,
        output_tags: O,
        options: &InferenceOptions,
    ) -> Result<Self, ServingError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let inputs = resolve_tags(input_tags, options, "input");
        let outputs = resolve_tags(output_tags, options, "output");
        if inputs.is_empty() {
            return Err(ServingError::Config("no input tags declared".to_string()));
        }
        if outputs.is_empty() {
            return Err(ServingError::Config("no output tags declared".to_string()));
        }
        Ok(Self { inputs, outputs })
    }

    pub fn input_kind(&self, tag: &str) -> Option<TagKind> {
        self.inputs.get(tag).copied()
    }

    pub fn output_kind(&self, tag: &str) -> Option<TagKind> {
        self.outputs.get(tag).copied()
    }

    pub fn inputs(&self) -> impl Iterator<Item = (&str, TagKind)> {
        self.inputs.iter().map(|(tag, kind)| (tag.as_str(), *kind))
    }

    pub fn outputs(&self) -> impl Iterator<Item = (&str, TagKind)> {
        self.outputs.iter().map(|(tag, kind)| (tag.as_str(), *kind))
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Checks an incoming packet against its declared input kind.
    pub fn check_input(&self, tag: &str, packet: &Packet) -> Result<TagKind, ServingError> {
        let expected = self
            .input_kind(tag)
            .ok_or_else(|| ServingError::UnknownTag(tag.to_string()))?;
        let got = packet.kind();
        if got != expected {
            return Err(ServingError::PacketKind {
                tag: tag.to_string(),
                expected,
                got,
            });
        }
        Ok(expected)
    }
}

fn resolve_tags<T>(tags: T, options: &InferenceOptions, side: &str) -> BTreeMap<String, TagKind>
where
    T: IntoIterator,
    T::Item: Into<String>,
{
    tags.into_iter()
        .map(|tag| {
            let tag = tag.into();
            let kind = match options.tag_kinds.get(&tag) {
                Some(kind) => *kind,
                None => classify(&tag),
            };
            base::log_debug!("{} tag {} resolved as {}", side, tag, kind);
            (tag, kind)
        })
        .collect()
}
