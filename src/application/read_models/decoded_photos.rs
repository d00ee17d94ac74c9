//! Decoded photo bodies aligned to a session's observations

use crate::inspection::domain::InspectionSession;
use crate::inspection::services::{DecodedImage, ImagePayloadDecoder};

/// Position of one photo payload inside a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhotoSlot {
    /// Index into `InspectionSession::observations`
    pub observation: usize,
    /// Index into that observation's `photos`
    pub photo: usize,
}

/// Successfully decoded photos, grouped by observation index
///
/// Undecodable payloads are simply absent; the surviving photos of an observation
/// keep their captured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedPhotos {
    by_observation: Vec<Vec<DecodedImage>>,
}

impl DecodedPhotos {
    /// Decodes every photo of the session on the current thread
    pub fn decode_sequential(session: &InspectionSession) -> Self {
        let results = Self::slots(session)
            .map(|(slot, payload)| (slot, ImagePayloadDecoder::decode(payload)))
            .collect();
        Self::from_slots(session.observations.len(), results)
    }

    /// Every photo payload of the session with its slot, in session order
    pub fn slots(session: &InspectionSession) -> impl Iterator<Item = (PhotoSlot, &str)> {
        session
            .observations
            .iter()
            .enumerate()
            .flat_map(|(observation, obs)| {
                obs.photos.iter().enumerate().map(move |(photo, payload)| {
                    (PhotoSlot { observation, photo }, payload.as_str())
                })
            })
    }

    /// Assembles decode results that may have arrived in any order
    ///
    /// Results are sorted by slot first, so the outcome is the same as decoding
    /// sequentially. Slots beyond `observation_count` are dropped.
    pub fn from_slots(
        observation_count: usize,
        mut results: Vec<(PhotoSlot, Option<DecodedImage>)>,
    ) -> Self {
        results.sort_by_key(|(slot, _)| *slot);

        let mut by_observation = vec![Vec::new(); observation_count];
        for (slot, image) in results {
            if let (Some(bucket), Some(image)) = (by_observation.get_mut(slot.observation), image)
            {
                bucket.push(image);
            }
        }
        Self { by_observation }
    }

    /// Decoded photos of the observation at `index`; empty when none decoded
    pub fn for_observation(&self, index: usize) -> &[DecodedImage] {
        self.by_observation
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.by_observation.iter().map(Vec::len).sum()
    }
}
