// Sorteio - Draw Requests
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::SorteioError;

/// What the operator reads off the drum to seed a raffle
///
/// Layout (little endian):
/// 0. `[8]` start number
/// 1. `[1]` start series, 0 meaning series 10
/// 2. `[1]` single series flag, 0 or 1
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRequest {
    pub start_number: u64,
    pub start_series: u8,
    pub single_series_only: bool,
}

impl DrawRequest {
    pub const LEN: usize = 8 + 1 + 1;

    pub fn new(start_number: u64, start_series: u8, single_series_only: bool) -> Self {
        Self {
            start_number,
            start_series,
            single_series_only,
        }
    }

    /// Unpacks a byte buffer into a DrawRequest
    pub fn unpack(input: &[u8]) -> Result<Self, SorteioError> {
        if input.len() < Self::LEN {
            return Err(SorteioError::InvalidRequestData);
        }
        let src = array_ref![input, 0, DrawRequest::LEN];
        let (start_number, start_series, single_series_only) = array_refs![src, 8, 1, 1];

        let single_series_only = match single_series_only[0] {
            0 => false,
            1 => true,
            _ => return Err(SorteioError::InvalidRequestData),
        };

        Ok(DrawRequest {
            start_number: u64::from_le_bytes(*start_number),
            start_series: start_series[0],
            single_series_only,
        })
    }

    pub fn pack(&self) -> [u8; DrawRequest::LEN] {
        let mut buf = [0u8; DrawRequest::LEN];
        let dst = &mut buf;
        let (start_number_dst, start_series_dst, single_series_only_dst) =
            mut_array_refs![dst, 8, 1, 1];

        *start_number_dst = self.start_number.to_le_bytes();
        start_series_dst[0] = self.start_series;
        single_series_only_dst[0] = self.single_series_only as u8;
        buf
    }

    pub fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), SorteioError> {
        if dst.len() < Self::LEN {
            return Err(SorteioError::InvalidRequestData);
        }
        let dst = array_mut_ref![dst, 0, DrawRequest::LEN];
        *dst = self.pack();
        Ok(())
    }
}
