use {
    crate::{
        Contract, Disassembler, InferenceOptions, Packet, ServingError, Session, assemble_inputs,
    },
    base::{Stamped, Timestamp},
    std::{collections::BTreeMap, sync::Arc},
};

/// Graph node that runs one inference per invocation on a shared session.
pub struct InferenceNode {
    session: Arc<dyn Session>,
    options: InferenceOptions,
    contract: Contract,
    disassembler: Disassembler,
}

impl InferenceNode {
    pub fn open<I, O>(
        session: Arc<dyn Session>,
        input_tags: I,
        output_tags: O,
        options: InferenceOptions,
    ) -> Result<Self, ServingError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let contract = Contract::resolve(input_tags, output_tags, &options)?;
        base::log_debug!("inference node opened on {}", session.servable().name);
        Ok(Self {
            session,
            options,
            contract,
            disassembler: Disassembler::new(),
        })
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// Runs inference on the packets of one invocation. Every returned packet
    /// carries `timestamp`.
    pub fn process(
        &mut self,
        timestamp: Timestamp,
        packets: BTreeMap<String, Packet>,
    ) -> Result<Vec<(String, Stamped<Packet>)>, ServingError> {
        if packets.is_empty() {
            base::log_debug!("no input packets at {}", timestamp);
            return Ok(Vec::new());
        }
        let inputs = assemble_inputs(&self.contract, &self.options, &packets)?;
        base::log_debug!("inference on {} inputs at {}", inputs.len(), timestamp);
        let results = self.session.infer(&inputs).map_err(|err| {
            base::log_error!("inference failed: {}", err);
            ServingError::Inference(err)
        })?;
        self.disassembler
            .disassemble(&self.contract, &self.options, &results, timestamp)
    }
}
