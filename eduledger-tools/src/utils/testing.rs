use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
    sync::Mutex,
};

use crate::core::{
    artifact::artifact_path,
    ledger::{
        AccountId, ContractId, FileId, Hbar, LedgerClient, Receipt, RemoteError, Status,
        Transaction, TransactionBody,
    },
    operator::Operator,
    session::Session,
};

pub const TEST_ACCOUNT: AccountId = AccountId::new(0, 0, 1001);
pub const TEST_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

const FIRST_ENTITY_NUM: u64 = 5000;

pub fn test_operator() -> Operator {
    Operator::from_private_key(TEST_ACCOUNT, TEST_KEY).unwrap()
}

pub fn test_session(ledger: MockLedger) -> Session<MockLedger> {
    Session::new(ledger, test_operator())
}

/// Writes a Hardhat-style artifact under `base`.
pub fn write_artifact(base: &Path, name: &str, bytecode: &[u8], abi: &str) {
    let path = artifact_path(base, name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let json = format!(
        r#"{{"contractName":"{name}","abi":{abi},"bytecode":"0x{}"}}"#,
        hex::encode(bytecode)
    );
    fs::write(path, json).unwrap();
}

/// In-memory ledger.
///
/// File transactions are numbered in the order they are processed, so chunk `0` is the file
/// create and chunk `k` is the `k`-th append. Contract creates are numbered separately.
#[derive(Debug)]
pub struct MockLedger {
    balance: Hbar,
    failed_chunks: HashMap<usize, Status>,
    failed_contracts: HashMap<usize, Status>,
    disconnects: HashSet<usize>,
    omit_ids: bool,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    busy: usize,
    submitted: Vec<Transaction>,
    files: HashMap<FileId, Vec<u8>>,
    contracts: Vec<(ContractId, FileId)>,
    chunks_seen: usize,
    contracts_seen: usize,
    next_num: u64,
    balance_queries: usize,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            balance: Hbar::from_hbar(100),
            failed_chunks: HashMap::new(),
            failed_contracts: HashMap::new(),
            disconnects: HashSet::new(),
            omit_ids: false,
            state: Mutex::new(State {
                next_num: FIRST_ENTITY_NUM,
                ..Default::default()
            }),
        }
    }

    pub fn with_balance(mut self, balance: Hbar) -> Self {
        self.balance = balance;
        self
    }

    /// Rejects file chunk `index` with `status`.
    pub fn fail_chunk(mut self, index: usize, status: Status) -> Self {
        self.failed_chunks.insert(index, status);
        self
    }

    /// Rejects the `index`-th contract create with `status`.
    pub fn fail_contract(mut self, index: usize, status: Status) -> Self {
        self.failed_contracts.insert(index, status);
        self
    }

    /// Fails the submission of file chunk `index` at the transport level.
    pub fn disconnect_at_chunk(mut self, index: usize) -> Self {
        self.disconnects.insert(index);
        self
    }

    /// Acknowledges file and contract creates as successful without returning the new id.
    pub fn omit_ids(mut self) -> Self {
        self.omit_ids = true;
        self
    }

    /// Answers the next `count` submissions with `BUSY` without processing them.
    pub fn busy(self, count: usize) -> Self {
        self.state.lock().unwrap().busy = count;
        self
    }

    /// Every transaction received, in order.
    pub fn submitted(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().submitted.clone()
    }

    pub fn file_contents(&self, file_id: FileId) -> Option<Vec<u8>> {
        self.state.lock().unwrap().files.get(&file_id).cloned()
    }

    /// Contracts created so far, with the file each was created from.
    pub fn contracts(&self) -> Vec<(ContractId, FileId)> {
        self.state.lock().unwrap().contracts.clone()
    }

    pub fn balance_queries(&self) -> usize {
        self.state.lock().unwrap().balance_queries
    }
}

impl State {
    fn next_num(&mut self) -> u64 {
        let num = self.next_num;
        self.next_num += 1;
        num
    }
}

impl LedgerClient for MockLedger {
    async fn submit(&self, transaction: &Transaction) -> Result<Receipt, RemoteError> {
        let mut state = self.state.lock().unwrap();
        let is_file_tx = !matches!(transaction.body, TransactionBody::ContractCreate { .. });
        if is_file_tx && self.disconnects.contains(&state.chunks_seen) {
            return Err(RemoteError::Http {
                endpoint: "mock".into(),
                status: 503,
                body: "service unavailable".into(),
            });
        }

        state.submitted.push(transaction.clone());
        let transaction_id = format!("{}@{}.0", transaction.payer, state.submitted.len());
        if state.busy > 0 {
            state.busy -= 1;
            return Ok(Receipt::new(transaction_id, Status::Busy));
        }

        let mut receipt = Receipt::new(transaction_id, Status::Success);
        match &transaction.body {
            TransactionBody::FileCreate { contents, .. } => {
                let index = state.chunks_seen;
                state.chunks_seen += 1;
                if let Some(status) = self.failed_chunks.get(&index) {
                    receipt.status = status.clone();
                    return Ok(receipt);
                }
                let file_id = FileId::new(0, 0, state.next_num());
                state.files.insert(file_id, contents.to_vec());
                receipt.file_id = Some(file_id);
            }
            TransactionBody::FileAppend { file_id, contents } => {
                let index = state.chunks_seen;
                state.chunks_seen += 1;
                if let Some(status) = self.failed_chunks.get(&index) {
                    receipt.status = status.clone();
                    return Ok(receipt);
                }
                match state.files.get_mut(file_id) {
                    Some(file) => file.extend_from_slice(contents),
                    None => receipt.status = Status::InvalidFileId,
                }
            }
            TransactionBody::ContractCreate {
                bytecode_file_id, ..
            } => {
                let index = state.contracts_seen;
                state.contracts_seen += 1;
                if let Some(status) = self.failed_contracts.get(&index) {
                    receipt.status = status.clone();
                    return Ok(receipt);
                }
                let contract_id = ContractId::new(0, 0, state.next_num());
                state.contracts.push((contract_id, *bytecode_file_id));
                receipt.contract_id = Some(contract_id);
            }
        }
        if self.omit_ids {
            receipt.file_id = None;
            receipt.contract_id = None;
        }
        Ok(receipt)
    }

    async fn account_balance(&self, account: AccountId) -> Result<Hbar, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.balance_queries += 1;
        assert_eq!(account, TEST_ACCOUNT);
        Ok(self.balance)
    }
}
