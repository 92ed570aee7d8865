use {
    crate::{Contract, InferenceOptions, Packet, ServingError, TagKind, TensorFormat, TfLiteArena},
    base::{Stamped, Timestamp},
    std::collections::BTreeMap,
    tensor::{NamedTensorSet, TensorError, TensorHandle, convert},
};

/// Turns inference results back into output packets.
///
/// Holds one [`TfLiteArena`] per mobile-runtime output tag, so it lives as
/// long as the node does.
#[derive(Debug, Default)]
pub struct Disassembler {
    arenas: BTreeMap<String, TfLiteArena>,
}

impl Disassembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self, tag: &str) -> Option<&TfLiteArena> {
        self.arenas.get(tag)
    }

    pub fn disassemble(
        &mut self,
        contract: &Contract,
        options: &InferenceOptions,
        results: &NamedTensorSet,
        timestamp: Timestamp,
    ) -> Result<Vec<(String, Stamped<Packet>)>, ServingError> {
        if results.len() < contract.output_count() {
            return Err(ServingError::TooFewOutputs {
                expected: contract.output_count(),
                got: results.len(),
            });
        }
        let mut packets = Vec::with_capacity(contract.output_count());
        for (tag, kind) in contract.outputs() {
            let name = options.output_name(tag);
            let handle = results
                .get(name)
                .ok_or_else(|| ServingError::MissingOutput(name.to_string()))?;
            let packet = if kind.is_vector() {
                let selected = select_vector(tag, options, results)?;
                self.vector_packet(tag, kind, &selected)?
            } else {
                self.single_packet(tag, kind, name, handle)?
            };
            base::log_debug!("emitting {} on {} at {}", packet.kind(), tag, timestamp);
            packets.push((tag.to_string(), Stamped::new(timestamp, packet)));
        }
        Ok(packets)
    }

    fn single_packet(
        &mut self,
        tag: &str,
        kind: TagKind,
        name: &str,
        handle: &TensorHandle,
    ) -> Result<Packet, ServingError> {
        Ok(match kind.format {
            TensorFormat::OpenVino => Packet::Ov(convert::handle_to_ov(handle)?),
            TensorFormat::MediaPipe => Packet::Mp(convert::handle_to_mp(handle)?),
            TensorFormat::TensorFlow => Packet::Tf(convert::handle_to_tf(handle)?),
            TensorFormat::TfLite => {
                let mut tensors = self.arena_mut(tag).fill(tag, &[(name, handle)])?;
                match tensors.pop() {
                    Some(tensor) => Packet::TfLite(tensor),
                    None => return Err(ServingError::MissingOutput(name.to_string())),
                }
            }
        })
    }

    fn vector_packet(
        &mut self,
        tag: &str,
        kind: TagKind,
        selected: &[(&str, &TensorHandle)],
    ) -> Result<Packet, ServingError> {
        let handles = selected.iter().map(|(_, handle)| *handle);
        Ok(match kind.format {
            TensorFormat::OpenVino => Packet::OvVec(convert_all(handles, convert::handle_to_ov)?),
            TensorFormat::MediaPipe => Packet::MpVec(convert_all(handles, convert::handle_to_mp)?),
            TensorFormat::TensorFlow => Packet::TfVec(convert_all(handles, convert::handle_to_tf)?),
            TensorFormat::TfLite => Packet::TfLiteVec(self.arena_mut(tag).fill(tag, selected)?),
        })
    }

    fn arena_mut(&mut self, tag: &str) -> &mut TfLiteArena {
        self.arenas.entry(tag.to_string()).or_default()
    }
}

fn convert_all<'a, T>(
    handles: impl Iterator<Item = &'a TensorHandle>,
    to_format: fn(&TensorHandle) -> Result<T, TensorError>,
) -> Result<Vec<T>, TensorError> {
    handles.map(to_format).collect()
}

/// Results emitted on a vector output: the output ordering list when one is
/// configured, otherwise every result in name order.
fn select_vector<'a>(
    tag: &str,
    options: &'a InferenceOptions,
    results: &'a NamedTensorSet,
) -> Result<Vec<(&'a str, &'a TensorHandle)>, ServingError> {
    let order = &options.output_order_list;
    if order.is_empty() {
        return Ok(results
            .iter()
            .map(|(name, handle)| (name.as_str(), handle))
            .collect());
    }
    if order.len() > results.len() {
        return Err(ServingError::OrderingList {
            tag: tag.to_string(),
            expected: results.len(),
            got: order.len(),
        });
    }
    order
        .iter()
        .map(|name| {
            results
                .get(name)
                .map(|handle| (name.as_str(), handle))
                .ok_or_else(|| ServingError::MissingOutput(name.clone()))
        })
        .collect()
}
