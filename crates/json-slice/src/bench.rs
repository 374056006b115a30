//! Timing harness comparing a sliced decoder against `serde_json`.
//!
//! Each round generates a product document, infers its schema, compiles a
//! decoder, checks that both paths agree, then times `iterations` decodes on
//! each path. Time and randomness come from the caller ([`Clock`], `Rng`).

use std::hint::black_box;
use std::time::{Duration, Instant};

use json_slice_random::{RandomDocument, RandomDocumentOptions};
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

use crate::decoder::{compile, Decoder};
use crate::error::{DecodeError, SchemaError};
use crate::schema::json_to_schema;
use crate::verify::assert_output_same;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Source of monotonic time.
pub trait Clock {
    /// Time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
    fn sleep(&self, duration: Duration);
}

pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub document: RandomDocumentOptions,
    /// Decodes per timed phase.
    pub iterations: usize,
    /// Rounds to run; 0 runs until the process is stopped.
    pub rounds: usize,
    /// Pause before the sliced phase and after the generic phase. The generic
    /// phase is preceded by two and a half pauses.
    pub pause: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            document: RandomDocumentOptions::default(),
            iterations: 10_000,
            rounds: 5,
            pause: Duration::from_millis(200),
        }
    }
}

/// A generated product with everything needed to decode it.
#[derive(Debug, Clone)]
pub struct Sample {
    pub product: Value,
    pub schema: Value,
    pub text: String,
    pub decoder: Decoder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub specialized: Duration,
    pub generic: Duration,
    pub document_len: usize,
    pub chain_depth: usize,
}

impl RoundReport {
    /// Generic time minus sliced time, in microseconds. Positive when slicing
    /// won.
    pub fn difference_micros(&self) -> i128 {
        self.generic.as_micros() as i128 - self.specialized.as_micros() as i128
    }
}

pub struct Bench<C, R> {
    config: BenchConfig,
    clock: C,
    rng: R,
}

impl<C: Clock, R: Rng> Bench<C, R> {
    pub fn new(config: BenchConfig, clock: C, rng: R) -> Self {
        Self { config, clock, rng }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Generate a product, compile its decoder and check both decode paths
    /// agree on it.
    pub fn sample(&mut self) -> Result<Sample, BenchError> {
        let product = RandomDocument::generate(&mut self.rng, &self.config.document);
        let schema = json_to_schema(&product)?;
        let decoder = compile(&schema)?;
        let text = serde_json::to_string(&product)?;
        let generic: Value = serde_json::from_str(&text)?;
        assert_output_same(&generic, &decoder.decode(&text)?)?;
        Ok(Sample {
            product,
            schema,
            text,
            decoder,
        })
    }

    pub fn run_round(&mut self) -> Result<RoundReport, BenchError> {
        let sample = self.sample()?;
        let pause = self.config.pause;

        self.clock.sleep(pause);
        let specialized = self.time(|| sample.decoder.decode(&sample.text))?;

        self.clock.sleep(pause * 5 / 2);
        let generic = self.time(|| Ok(serde_json::from_str::<Value>(&sample.text)?))?;

        self.clock.sleep(pause);
        Ok(RoundReport {
            specialized,
            generic,
            document_len: sample.text.len(),
            chain_depth: sample.decoder.chain_depth(),
        })
    }

    /// Run the configured number of rounds, logging each report. Returns the
    /// number of rounds completed.
    pub fn run(&mut self) -> Result<usize, BenchError> {
        let mut round = 0;
        while self.config.rounds == 0 || round < self.config.rounds {
            tracing::info!(round, "begin iteration");
            let report = self.run_round()?;
            tracing::info!(
                round,
                document_len = report.document_len,
                chain_depth = report.chain_depth,
                "sliced decode took {} nanoseconds",
                report.specialized.as_nanos()
            );
            tracing::info!(
                round,
                "generic parse took {} nanoseconds",
                report.generic.as_nanos()
            );
            tracing::info!(
                round,
                "difference of latter minus former is {} microseconds",
                report.difference_micros()
            );
            round += 1;
        }
        Ok(round)
    }

    fn time<F>(&self, mut decode: F) -> Result<Duration, DecodeError>
    where
        F: FnMut() -> Result<Value, DecodeError>,
    {
        let start = self.clock.now();
        for _ in 0..self.config.iterations {
            black_box(decode()?);
        }
        Ok(self.clock.now().saturating_sub(start))
    }
}
