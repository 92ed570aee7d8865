//! Reusable output storage for mobile-runtime tensors.
//!
//! The first invocation allocates one set of buffers, one per emitted output,
//! sized to what inference returned. Later invocations copy into a set that
//! no emitted packet refers to any more. When the host still holds packets
//! from every set, another set is allocated, so emitted packets never change
//! under it and steady state alternates between the sets already allocated.

use {
    crate::ServingError,
    tensor::{Buffer, TensorError, TensorHandle, TfLiteTensor},
};

/// Name and dims of every tensor the arena holds, in emission order.
pub type Layout = Vec<(String, Vec<i32>)>;

#[derive(Debug, Default)]
pub enum TfLiteArena {
    #[default]
    Uninitialized,
    Initialized {
        layout: Layout,
        /// Buffer sets in allocation order, each matching `layout`.
        sets: Vec<Vec<TfLiteTensor>>,
    },
}

impl TfLiteArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self, TfLiteArena::Initialized { .. })
    }

    pub fn layout(&self) -> Option<&Layout> {
        match self {
            TfLiteArena::Uninitialized => None,
            TfLiteArena::Initialized { layout, .. } => Some(layout),
        }
    }

    /// Number of buffer sets allocated so far.
    pub fn set_count(&self) -> usize {
        match self {
            TfLiteArena::Uninitialized => 0,
            TfLiteArena::Initialized { sets, .. } => sets.len(),
        }
    }

    /// Copies `outputs` into the arena and returns tensors aliasing it.
    pub fn fill(
        &mut self,
        tag: &str,
        outputs: &[(&str, &TensorHandle)],
    ) -> Result<Vec<TfLiteTensor>, ServingError> {
        let layout = layout_of(outputs)?;
        match self {
            TfLiteArena::Uninitialized => {
                let set = allocate(&layout, outputs)?;
                base::log_debug!("allocated {} output buffers for {}", set.len(), tag);
                let emitted = set.clone();
                *self = TfLiteArena::Initialized {
                    layout,
                    sets: vec![set],
                };
                Ok(emitted)
            }
            TfLiteArena::Initialized {
                layout: recorded,
                sets,
            } => {
                if *recorded != layout {
                    base::log_error!(
                        "output layout of {} changed from {:?} to {:?}",
                        tag,
                        recorded,
                        layout
                    );
                    return Err(ServingError::OutputLayoutChanged(tag.to_string()));
                }
                let released = sets
                    .iter()
                    .position(|set| set.iter().all(|tensor| tensor.buffer().is_unique()));
                match released {
                    Some(index) => {
                        let set = &mut sets[index];
                        for (tensor, (_, handle)) in set.iter_mut().zip(outputs) {
                            let bytes = tensor.buffer_mut().make_mut();
                            bytes.copy_from_slice(handle.bytes());
                        }
                        Ok(set.clone())
                    }
                    None => {
                        let set = allocate(&layout, outputs)?;
                        base::log_debug!(
                            "output buffers of {} still held, allocating set {}",
                            tag,
                            sets.len() + 1
                        );
                        let emitted = set.clone();
                        sets.push(set);
                        Ok(emitted)
                    }
                }
            }
        }
    }
}

fn allocate(
    layout: &Layout,
    outputs: &[(&str, &TensorHandle)],
) -> Result<Vec<TfLiteTensor>, TensorError> {
    outputs
        .iter()
        .zip(layout)
        .map(|((_, handle), (name, dims))| {
            let bytes = Buffer::shared(handle.bytes().to_vec());
            TfLiteTensor::from_buffer(name.clone(), dims.clone(), bytes)
        })
        .collect()
}

fn layout_of(outputs: &[(&str, &TensorHandle)]) -> Result<Layout, TensorError> {
    outputs
        .iter()
        .map(|(name, handle)| {
            if handle.kind() != TfLiteTensor::ELEMENT_KIND {
                return Err(TensorError::ElementKindMismatch {
                    expected: TfLiteTensor::ELEMENT_KIND,
                    got: handle.kind(),
                });
            }
            let dims = handle
                .shape()
                .dims()
                .iter()
                .map(|&dim| i32::try_from(dim).map_err(|_| TensorError::ShapeOverflow))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((name.to_string(), dims))
        })
        .collect()
}
