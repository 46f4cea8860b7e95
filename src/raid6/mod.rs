//! RAID-6 style erasure coding over GF(256)
//!
//! A [`Raid6`] coder turns `D` data shards into `D + 2` shards by appending
//! a P parity row (the XOR of the data rows) and a Q parity row (a weighted
//! XOR with column `c` weighted by `(c+1)^2` under field arithmetic). Any
//! two erased shards can be recovered by inverting the encoder rows that
//! survive.
//!
//! A shard set moves through a simple lifecycle: [`Encoder::split`] slices a
//! byte buffer into data shards plus zeroed parity placeholders,
//! [`Encoder::encode`] fills the parity rows, losses empty out up to two
//! rows, [`Encoder::reconstruct`] repopulates them, and [`Encoder::join`]
//! streams the original bytes into a sink.

mod error;

pub use error::{ErasureError, Result};

use crate::galois::{wellknown, GF};
use crate::matrix::Matrix;
use log::debug;
use rayon::prelude::*;
use std::io::Write;

/// The operations every shard encoder offers.
pub trait Encoder {
    /// Fill the parity rows of a shard sequence from its data rows.
    fn encode(&self, shards: &mut [Vec<u8>]) -> Result<()>;

    /// Recover every erased row, data and parity alike.
    fn reconstruct(&self, shards: &mut [Vec<u8>]) -> Result<()>;

    /// Recover erased data rows only, leaving parity rows as received.
    fn reconstruct_data(&self, shards: &mut [Vec<u8>]) -> Result<()>;

    /// Slice a byte buffer into data shards plus zeroed parity placeholders.
    fn split(&self, data: &[u8]) -> Result<Vec<Vec<u8>>>;

    /// Concatenate the data shards into `dst`, emitting exactly `out_size`
    /// bytes.
    fn join(&self, dst: &mut dyn Write, shards: &[Vec<u8>], out_size: usize) -> Result<()>;
}

/// A two-parity erasure coder in the classical RAID-6 shape.
pub struct Raid6 {
    data_shards: usize,
    parity_shards: usize,
    total_shards: usize,
    field: &'static GF,
    encoder: Matrix,
}

impl Raid6 {
    /// Build a coder for `data_shards` data rows and exactly two parity
    /// rows. The total shard count must fit in the coder's GF(256) field.
    pub fn new(data_shards: usize, parity_shards: usize) -> Result<Raid6> {
        if parity_shards != 2 {
            return Err(ErasureError::ParityNonEqualTwo);
        }
        if data_shards < 1 {
            return Err(ErasureError::InvShardNum);
        }
        if data_shards + parity_shards > 256 {
            return Err(ErasureError::MaxShardNum);
        }
        let field = wellknown::default_field();
        let encoder = field.raid6_encoder_matrix(data_shards + parity_shards, data_shards)?;
        Ok(Raid6 {
            data_shards,
            parity_shards,
            total_shards: data_shards + parity_shards,
            field,
            encoder,
        })
    }

    /// The number of data shards.
    pub fn data_shards(&self) -> usize {
        self.data_shards
    }

    /// The number of parity shards (always 2).
    pub fn parity_shards(&self) -> usize {
        self.parity_shards
    }

    /// The total shard count, data plus parity.
    pub fn total_shards(&self) -> usize {
        self.total_shards
    }

    /// Multiply a coefficient matrix by a block of shard rows, producing one
    /// output row per matrix row. Output rows are independent, so they are
    /// computed in parallel; zero coefficients are skipped.
    fn matrix_shard_multiply(&self, m: &Matrix, shards: &[Vec<u8>]) -> Vec<Vec<u8>> {
        let len = shards[0].len();
        (0..m.row_count())
            .into_par_iter()
            .map(|r| {
                let mut out = vec![0u8; len];
                for (i, shard) in shards.iter().enumerate() {
                    let coefficient = m.get(r, i);
                    if coefficient == 0 {
                        continue;
                    }
                    for (acc, &byte) in out.iter_mut().zip(shard) {
                        *acc ^= self.field.mul(coefficient, byte);
                    }
                }
                out
            })
            .collect()
    }

    /// Collect the first `data_shards` surviving rows, invert the matching
    /// encoder rows, and multiply back to the original data block.
    fn recover_data(&self, shards: &[Vec<u8>]) -> Result<Vec<Vec<u8>>> {
        let mut surviving = Vec::with_capacity(self.data_shards);
        let mut valid_indices = Vec::with_capacity(self.data_shards);
        for (index, shard) in shards.iter().enumerate() {
            if surviving.len() == self.data_shards {
                break;
            }
            if !shard.is_empty() {
                surviving.push(shard.clone());
                valid_indices.push(index);
            }
        }
        if surviving.len() < self.data_shards {
            return Err(ErasureError::TooFewShards);
        }
        let len = surviving[0].len();
        if surviving.iter().any(|shard| shard.len() != len) {
            return Err(ErasureError::ShardSize);
        }
        debug!(
            "reconstructing {} data shards from surviving rows {:?}",
            self.data_shards, valid_indices
        );

        let mut sub_matrix = Matrix::new(self.data_shards, self.data_shards)?;
        for (sub_row, &valid) in valid_indices.iter().enumerate() {
            for c in 0..self.data_shards {
                sub_matrix.set(sub_row, c, self.encoder.get(valid, c));
            }
        }
        let decode = self.field.matrix_invert(&sub_matrix)?;
        Ok(self.matrix_shard_multiply(&decode, &surviving))
    }
}

impl Encoder for Raid6 {
    fn encode(&self, shards: &mut [Vec<u8>]) -> Result<()> {
        if shards.len() != self.total_shards {
            return Err(ErasureError::ShardNoData);
        }
        let len = shards[0].len();
        if len == 0 {
            return Err(ErasureError::ShardNoData);
        }
        if shards.iter().any(|shard| shard.len() != len) {
            return Err(ErasureError::ShardSize);
        }
        debug!(
            "encoding {} data shards of {} bytes into {} total shards",
            self.data_shards, len, self.total_shards
        );
        let encoded = self.matrix_shard_multiply(&self.encoder, &shards[..self.data_shards]);
        // The top block of the encoder matrix is the identity, so the data
        // rows come back unchanged.
        for (shard, row) in shards.iter_mut().zip(encoded) {
            *shard = row;
        }
        Ok(())
    }

    fn reconstruct(&self, shards: &mut [Vec<u8>]) -> Result<()> {
        if shards.len() != self.total_shards {
            return Err(ErasureError::TooFewShards);
        }
        let data = self.recover_data(shards)?;
        // Re-encode the recovered data so erased parity rows come back too.
        let encoded = self.matrix_shard_multiply(&self.encoder, &data);
        for (shard, row) in shards.iter_mut().zip(encoded) {
            *shard = row;
        }
        Ok(())
    }

    fn reconstruct_data(&self, shards: &mut [Vec<u8>]) -> Result<()> {
        if shards.len() != self.total_shards {
            return Err(ErasureError::TooFewShards);
        }
        let data = self.recover_data(shards)?;
        // Only the data rows are rewritten; erased parity stays erased.
        for (shard, row) in shards.iter_mut().zip(data) {
            *shard = row;
        }
        Ok(())
    }

    fn split(&self, data: &[u8]) -> Result<Vec<Vec<u8>>> {
        if data.is_empty() {
            return Err(ErasureError::ShortData);
        }
        let per_shard = data.len().div_ceil(self.data_shards);
        debug!(
            "splitting {} bytes into {} data shards of {} bytes",
            data.len(),
            self.data_shards,
            per_shard
        );
        // Fresh zero-padded buffers; the input slice is never indexed past
        // its length.
        let mut shards = Vec::with_capacity(self.total_shards);
        for i in 0..self.data_shards {
            let mut shard = vec![0u8; per_shard];
            let start = (i * per_shard).min(data.len());
            let end = ((i + 1) * per_shard).min(data.len());
            shard[..end - start].copy_from_slice(&data[start..end]);
            shards.push(shard);
        }
        for _ in 0..self.parity_shards {
            shards.push(vec![0u8; per_shard]);
        }
        Ok(shards)
    }

    fn join(&self, dst: &mut dyn Write, shards: &[Vec<u8>], out_size: usize) -> Result<()> {
        if shards.len() < self.data_shards {
            return Err(ErasureError::TooFewShards);
        }
        let shards = &shards[..self.data_shards];
        let mut size = 0usize;
        for shard in shards {
            if shard.is_empty() {
                return Err(ErasureError::ReconstructRequired);
            }
            size += shard.len();
            if size >= out_size {
                break;
            }
        }
        if size < out_size {
            return Err(ErasureError::ShortData);
        }

        let mut remaining = out_size;
        for shard in shards {
            if remaining < shard.len() {
                dst.write_all(&shard[..remaining])?;
                return Ok(());
            }
            dst.write_all(shard)?;
            remaining -= shard.len();
        }
        Ok(())
    }
}
