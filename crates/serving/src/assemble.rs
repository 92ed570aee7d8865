use {
    crate::{Contract, InferenceOptions, Packet, ServingError},
    std::collections::BTreeMap,
    tensor::NamedTensorSet,
};

/// Builds the named inference inputs for one invocation.
///
/// Every packet must sit on a declared input tag and match its kind. A vector
/// packet holding more than one tensor needs an input ordering list of the
/// same length, which names the tensors by position.
pub fn assemble_inputs(
    contract: &Contract,
    options: &InferenceOptions,
    packets: &BTreeMap<String, Packet>,
) -> Result<NamedTensorSet, ServingError> {
    let mut inputs = NamedTensorSet::new();
    for (tag, packet) in packets {
        let kind = contract.check_input(tag, packet)?;
        let name = options.input_name(tag);
        let mut handles = packet.to_handles()?;
        if !kind.is_vector() {
            if let Some(handle) = handles.pop() {
                base::log_debug!("binding {} from {} as {}", name, tag, handle.shape());
                inputs.insert(name, handle);
            }
            continue;
        }

        let order = &options.input_order_list;
        let count = handles.len();
        if count > 1 && order.len() != count {
            return Err(ServingError::OrderingList {
                tag: tag.clone(),
                expected: count,
                got: order.len(),
            });
        }
        if !order.is_empty() && order.len() == count {
            for (position, handle) in handles.into_iter().enumerate() {
                base::log_debug!("binding {} from {}[{}]", order[position], tag, position);
                inputs.insert(order[position].as_str(), handle);
            }
        } else if let Some(handle) = handles.pop() {
            base::log_debug!("binding {} from {}[0]", name, tag);
            inputs.insert(name, handle);
        }
    }
    Ok(inputs)
}
