use explorer_error::Error;
use explorer_jsonrpc_types::{
    CheckpointSet, CheckpointView, EpochGasSummary, EpochView, GasCostSummary,
};
use explorer_logger::trace;
use explorer_systemtime::Clock;
use explorer_traits::{CheckpointProvider, EpochProvider};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Number of epochs in the mock history, numbered from 0.
pub const MOCK_EPOCH_COUNT: u64 = 20;
/// Checkpoints generated for every epoch.
pub const CHECKPOINTS_PER_EPOCH: u64 = 20;
/// Length of a finished mock epoch in millis.
pub const MOCK_EPOCH_DURATION: u64 = 24 * 60 * 60 * 1000;

const EPOCH_SALT: u64 = 0x6570_6f63;
const CHECKPOINT_SALT: u64 = 0x636b_7074;
const DIGEST_SALT: u64 = 0x6469_6773;
const WINDOW_SALT: u64 = 0x7769_6e64;

/// A deterministic mock chain history.
///
/// The last epoch is in progress: it started up to one day before the anchor instant and ends up
/// to one day after it. Earlier epochs are back to back, one day each. The same seed and anchor
/// always give the same data.
#[derive(Clone, Debug)]
pub struct MockSource {
    seed: u64,
    anchor: u64,
}

impl MockSource {
    /// Creates a mock history anchored at the current instant of `clock`.
    pub fn new<C: Clock>(seed: u64, clock: &C) -> Self {
        Self::with_anchor(seed, clock.now_millis())
    }

    /// Creates a mock history anchored at `anchor` millis.
    pub fn with_anchor(seed: u64, anchor: u64) -> Self {
        MockSource { seed, anchor }
    }

    /// The number of the epoch in progress.
    pub fn current_epoch_number(&self) -> u64 {
        MOCK_EPOCH_COUNT - 1
    }

    fn rng(&self, salt: u64, index: u64) -> StdRng {
        let mixed = self.seed.rotate_left(17)
            ^ salt.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ index.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        StdRng::seed_from_u64(mixed)
    }

    fn current_window(&self) -> (u64, u64) {
        let mut rng = self.rng(WINDOW_SALT, self.current_epoch_number());
        let start = self
            .anchor
            .saturating_sub(rng.gen_range(0..MOCK_EPOCH_DURATION));
        let end = self
            .anchor
            .saturating_add(rng.gen_range(1..=MOCK_EPOCH_DURATION));
        (start, end)
    }

    fn window(&self, number: u64) -> (u64, u64) {
        let (current_start, current_end) = self.current_window();
        let back = self.current_epoch_number() - number;
        if back == 0 {
            return (current_start, current_end);
        }
        let start = current_start.saturating_sub(back * MOCK_EPOCH_DURATION);
        (start, start.saturating_add(MOCK_EPOCH_DURATION))
    }

    fn digest(&self, sequence_number: u64) -> String {
        let bytes: [u8; 20] = self.rng(DIGEST_SALT, sequence_number).r#gen();
        faster_hex::hex_string(&bytes)
    }

    fn epoch(&self, number: u64) -> EpochView {
        let mut rng = self.rng(EPOCH_SALT, number);
        let (start, end) = self.window(number);
        let in_progress = number == self.current_epoch_number();
        let first_checkpoint = number * CHECKPOINTS_PER_EPOCH;
        let gas_cost_summary = (!in_progress).then(|| EpochGasSummary {
            gas_revenue: rng.gen_range(0..100_000_000_000u128).into(),
            total_revenue: rng.gen_range(0..100_000_000_000u128).into(),
            storage_revenue: rng.gen_range(0..100_000_000_000u128).into(),
            stake_rewards: rng.gen_range(0..100_000_000_000u128).into(),
        });

        EpochView {
            epoch: number.into(),
            transaction_count: rng.gen_range(0..10_000_000u64).into(),
            checkpoint_set: Some(CheckpointSet(
                first_checkpoint.into(),
                (first_checkpoint + CHECKPOINTS_PER_EPOCH - 1).into(),
            )),
            start_timestamp: Some(start.into()),
            end_timestamp: Some(end.into()),
            storage_size: f64::from(rng.gen_range(0..1_000_000u32)) / 1000.0,
            total_rewards: rng.gen_range(0..100_000_000_000u128).into(),
            total_stake_rewards: rng.gen_range(0..100_000_000_000u128).into(),
            stake_subsidies: rng.gen_range(0..100_000_000_000u128).into(),
            storage_fund_earnings: rng.gen_range(0..100_000_000_000u128).into(),
            storage_fund_inflows: rng.gen_range(0..100_000_000_000u128).into(),
            storage_fund_outflows: rng.gen_range(0..100_000_000_000u128).into(),
            gas_cost_summary,
        }
    }

    fn checkpoint(&self, epoch: u64, index: u64, window: (u64, u64)) -> CheckpointView {
        let sequence_number = epoch * CHECKPOINTS_PER_EPOCH + index;
        let mut rng = self.rng(CHECKPOINT_SALT, sequence_number);
        let (start, end) = window;
        let last = end.min(self.anchor).max(start);
        let step = (last - start) / CHECKPOINTS_PER_EPOCH;

        CheckpointView {
            epoch: epoch.into(),
            sequence_number: sequence_number.into(),
            timestamp_ms: (start + index * step).into(),
            network_total_transactions: (sequence_number * 1_000 + rng.gen_range(0..1_000u64))
                .into(),
            content_digest: self.digest(sequence_number),
            signature: faster_hex::hex_string(&rng.r#gen::<[u8; 32]>()),
            previous_digest: sequence_number
                .checked_sub(1)
                .map(|previous| self.digest(previous)),
            epoch_rolling_gas_cost_summary: GasCostSummary {
                computation_cost: rng.gen_range(0..1_000_000u64).into(),
                storage_cost: rng.gen_range(0..1_000_000u64).into(),
                storage_rebate: rng.gen_range(0..1_000_000u64).into(),
            },
            transaction_count: rng.gen_range(0..10_000u64).into(),
            transactions: Vec::new(),
        }
    }
}

impl EpochProvider for MockSource {
    fn current_epoch(&self) -> Result<Option<EpochView>, Error> {
        Ok(Some(self.epoch(self.current_epoch_number())))
    }

    fn get_epoch(&self, number: u64) -> Result<Option<EpochView>, Error> {
        Ok((number < MOCK_EPOCH_COUNT).then(|| self.epoch(number)))
    }

    fn get_epochs(&self) -> Result<Vec<EpochView>, Error> {
        trace!("generating {} mock epochs, seed {}", MOCK_EPOCH_COUNT, self.seed);
        Ok((0..MOCK_EPOCH_COUNT).rev().map(|number| self.epoch(number)).collect())
    }
}

impl CheckpointProvider for MockSource {
    fn get_checkpoints(&self, epoch: u64) -> Result<Vec<CheckpointView>, Error> {
        if epoch >= MOCK_EPOCH_COUNT {
            return Ok(Vec::new());
        }
        let window = self.window(epoch);
        Ok((0..CHECKPOINTS_PER_EPOCH)
            .map(|index| self.checkpoint(epoch, index, window))
            .collect())
    }
}
