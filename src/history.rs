// Sorteio - Raffle History
use std::collections::HashSet;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::SorteioError;
use crate::instruction::DrawRequest;
use crate::state::WinnerRecord;

/// One completed raffle
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleEntry {
    pub request: DrawRequest,
    pub winners: Vec<WinnerRecord>,
}

/// Append-only log of the raffles run in this session
///
/// Nothing here is durable. `export` hands the caller bytes to keep wherever it likes.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RaffleHistory {
    entries: Vec<RaffleEntry>,
}

impl RaffleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, request: DrawRequest, winners: Vec<WinnerRecord>) {
        self.entries.push(RaffleEntry { request, winners });
    }

    pub fn entries(&self) -> &[RaffleEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&RaffleEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every customer that has won so far, in first-win order
    pub fn winning_customers(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut customers: Vec<&str> = Vec::new();
        for winner in self.entries.iter().flat_map(|e| e.winners.iter()) {
            if seen.insert(winner.customer_id.as_str()) {
                customers.push(winner.customer_id.as_str());
            }
        }
        customers
    }

    pub fn export(&self) -> Result<Vec<u8>, SorteioError> {
        self.try_to_vec().map_err(|_| SorteioError::HistoryCorrupted)
    }

    pub fn import(data: &[u8]) -> Result<Self, SorteioError> {
        Self::try_from_slice(data).map_err(|_| SorteioError::HistoryCorrupted)
    }
}
