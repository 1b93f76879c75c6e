use crate::domain::model::{Assignment, Exclusions};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::hash::Hash;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// 以拒絕取樣產生分配：每次洗牌整份名單，違反限制就重來，最多嘗試 `max_attempts` 次。
///
/// 不檢查參與者人數，也不檢查排除名單中的名字是否為參與者，這些由呼叫端先驗證。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assigner {
    max_attempts: usize,
}

impl Default for Assigner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Assigner {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn assign<T, R>(
        &self,
        participants: &[T],
        forbidden: &Exclusions<T>,
        rng: &mut R,
    ) -> Result<Assignment<T>>
    where
        T: Clone + Eq + Hash,
        R: Rng + ?Sized,
    {
        let mut giftees = participants.to_vec();

        for attempt in 1..=self.max_attempts {
            giftees.shuffle(rng);

            let valid = participants
                .iter()
                .zip(&giftees)
                .all(|(giver, giftee)| giver != giftee && !forbidden.is_excluded(giver, giftee));

            if valid {
                tracing::debug!("Found a valid arrangement on attempt {}", attempt);
                return Ok(Assignment::from_pairs(
                    participants.iter().cloned().zip(giftees),
                ));
            }
        }

        tracing::debug!(
            "Gave up after {} attempts ({} participants, {} exclusions)",
            self.max_attempts,
            participants.len(),
            forbidden.len()
        );
        Err(SantaError::NoValidArrangement {
            attempts: self.max_attempts,
        })
    }
}
