use {
    crowdfund_client::{
        crowdfund_sdk::{
            abi::{
                decode_address, decode_uint, encode_args, from_hex_data, selector, to_hex_data,
                Token,
            },
            Address, ViewCall,
        },
        types::{parse_quantity, to_quantity},
        ClientError, ClientResult, Provider, TxHash,
    },
    serde_json::{json, Value},
    std::{
        collections::HashMap,
        sync::{Mutex, MutexGuard},
    },
};

/// JSON-RPC error code wallets use when the user rejects a request (EIP-1193)
pub const USER_REJECTED_CODE: i64 = 4001;

/// A deployed campaign as the contract would store it
#[derive(Debug, Clone, Default)]
pub struct MockCampaign {
    pub owner: Address,
    pub goal: u128,
    pub deadline: u64,
    pub total_contributed: u128,
    pub funds_withdrawn: bool,
    pub contributions: HashMap<Address, u128>,
    pub balance: u128,
}

impl MockCampaign {
    pub fn goal_reached(&self) -> bool {
        self.total_contributed >= self.goal
    }

    pub fn time_left(&self, now: u64) -> u64 {
        self.deadline.saturating_sub(now)
    }
}

#[derive(Default)]
struct ChainState {
    now: u64,
    block_number: u64,
    nonce: u64,
    accounts: Vec<Address>,
    balances: HashMap<Address, u128>,
    campaigns: HashMap<Address, MockCampaign>,
    receipts: HashMap<TxHash, Value>,
    sent_transactions: Vec<Value>,
    reject_next_send: bool,
    hold_receipts: bool,
    failing_receipt_polls: usize,
    fail_reads: bool,
}

/// In-memory chain behind the [`Provider`] interface.
///
/// Transactions are mined as soon as they are sent, at the current clock.
/// The clock only moves when a test advances it.
pub struct MockChain {
    chain_id: u64,
    state: Mutex<ChainState>,
}

impl MockChain {
    pub fn new(chain_id: u64, now: u64) -> Self {
        Self {
            chain_id,
            state: Mutex::new(ChainState {
                now,
                ..Default::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChainState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Expose `account` through the wallet and fund it.
    pub fn add_account(&self, account: Address, balance: u128) {
        let mut state = self.lock();
        state.accounts.push(account);
        state.balances.insert(account, balance);
    }

    pub fn balance(&self, account: &Address) -> u128 {
        self.lock().balances.get(account).copied().unwrap_or(0)
    }

    pub fn now(&self) -> u64 {
        self.lock().now
    }

    pub fn advance_time(&self, seconds: u64) {
        self.lock().now += seconds;
    }

    pub fn campaign(&self, address: &Address) -> Option<MockCampaign> {
        self.lock().campaigns.get(address).cloned()
    }

    /// Number of `eth_sendTransaction` calls that reached the chain
    pub fn sent_transaction_count(&self) -> usize {
        self.lock().sent_transactions.len()
    }

    /// Make the wallet reject the next `eth_sendTransaction`.
    pub fn reject_next_send(&self) {
        self.lock().reject_next_send = true;
    }

    /// Keep receipts pending (simulates a transaction that never gets mined).
    pub fn hold_receipts(&self, hold: bool) {
        self.lock().hold_receipts = hold;
    }

    /// Fail the next `count` receipt lookups with a node-side error
    /// (simulates a flaky upstream while the transaction is already mined).
    pub fn fail_receipt_polls(&self, count: usize) {
        self.lock().failing_receipt_polls = count;
    }

    /// Make every `eth_call` fail with an RPC error.
    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    fn handle(&self, method: &str, params: Value) -> ClientResult<Value> {
        match method {
            "eth_chainId" => Ok(json!(to_quantity(self.chain_id as u128))),
            "eth_blockNumber" => Ok(json!(to_quantity(self.lock().block_number as u128))),
            "eth_accounts" | "eth_requestAccounts" => {
                let accounts: Vec<String> =
                    self.lock().accounts.iter().map(|a| a.to_string()).collect();
                Ok(json!(accounts))
            }
            "eth_call" => self.eth_call(&params),
            "eth_sendTransaction" => self.eth_send_transaction(&params),
            "eth_getTransactionReceipt" => {
                let hash: TxHash = param_str(&params, 0)?.parse()?;
                let mut state = self.lock();
                if state.failing_receipt_polls > 0 {
                    state.failing_receipt_polls -= 1;
                    return Err(ClientError::Rpc {
                        code: -32603,
                        message: "upstream timeout".to_string(),
                    });
                }
                if state.hold_receipts {
                    return Ok(Value::Null);
                }
                Ok(state.receipts.get(&hash).cloned().unwrap_or(Value::Null))
            }
            other => Err(ClientError::Rpc {
                code: -32601,
                message: format!("method not found: {other}"),
            }),
        }
    }

    fn eth_call(&self, params: &Value) -> ClientResult<Value> {
        let state = self.lock();
        if state.fail_reads {
            return Err(ClientError::Rpc {
                code: -32000,
                message: "header not found".to_string(),
            });
        }

        let call = &params[0];
        let to: Address = field_str(call, "to")?.parse()?;
        let data = from_hex_data(field_str(call, "data")?)?;

        // Calls to an address without code return empty data.
        let Some(campaign) = state.campaigns.get(&to) else {
            return Ok(json!("0x"));
        };
        if data.len() < 4 {
            return Ok(json!("0x"));
        }

        let sel = &data[..4];
        let now = state.now;
        let token = if sel == selector(ViewCall::Owner.signature()) {
            Token::Address(campaign.owner)
        } else if sel == selector(ViewCall::Goal.signature()) {
            Token::Uint(campaign.goal)
        } else if sel == selector(ViewCall::Deadline.signature()) {
            Token::Uint(campaign.deadline as u128)
        } else if sel == selector(ViewCall::TotalContributed.signature()) {
            Token::Uint(campaign.total_contributed)
        } else if sel == selector(ViewCall::TimeLeft.signature()) {
            Token::Uint(campaign.time_left(now) as u128)
        } else if sel == selector(ViewCall::GoalReached.signature()) {
            Token::Bool(campaign.goal_reached())
        } else if sel == selector(ViewCall::FundsWithdrawn.signature()) {
            Token::Bool(campaign.funds_withdrawn)
        } else if sel == selector(ViewCall::Contributions(Address::ZERO).signature()) {
            let who = decode_address(&data[4..])?;
            Token::Uint(campaign.contributions.get(&who).copied().unwrap_or(0))
        } else {
            return Err(ClientError::Rpc {
                code: 3,
                message: "execution reverted".to_string(),
            });
        };

        Ok(json!(to_hex_data(&encode_args(&[token]))))
    }

    fn eth_send_transaction(&self, params: &Value) -> ClientResult<Value> {
        let tx = params[0].clone();
        let mut state = self.lock();

        if std::mem::take(&mut state.reject_next_send) {
            return Err(ClientError::Rpc {
                code: USER_REJECTED_CODE,
                message: "User rejected the request.".to_string(),
            });
        }

        let from: Address = field_str(&tx, "from")?.parse()?;
        if !state.accounts.contains(&from) {
            return Err(ClientError::Rpc {
                code: 4100,
                message: format!("account {from} is not authorized"),
            });
        }
        let value = match tx.get("value").and_then(Value::as_str) {
            Some(quantity) => parse_quantity(quantity)?,
            None => 0,
        };
        let data = from_hex_data(field_str(&tx, "data")?)?;
        let to = match tx.get("to").and_then(Value::as_str) {
            Some(to) => Some(to.parse::<Address>()?),
            None => None,
        };

        state.nonce += 1;
        state.block_number += 1;
        let hash = tx_hash(state.nonce);
        state.sent_transactions.push(tx);

        let (success, contract_address) = match to {
            None => match create_campaign(&mut state, from, &data) {
                Some(address) => (true, Some(address)),
                None => (false, None),
            },
            Some(to) => (execute(&mut state, from, to, value, &data), None),
        };

        let receipt = json!({
            "transactionHash": hash.to_string(),
            "status": if success { "0x1" } else { "0x0" },
            "blockNumber": to_quantity(state.block_number as u128),
            "contractAddress": contract_address.map(|a| a.to_string()),
        });
        state.receipts.insert(hash, receipt);

        Ok(json!(hash.to_string()))
    }
}

impl Provider for MockChain {
    async fn request(&self, method: &str, params: Value) -> ClientResult<Value> {
        self.handle(method, params)
    }
}

fn param_str(params: &Value, index: usize) -> ClientResult<&str> {
    params[index]
        .as_str()
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing string param {index}")))
}

fn field_str<'a>(object: &'a Value, field: &str) -> ClientResult<&'a str> {
    object[field]
        .as_str()
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing field {field}")))
}

fn tx_hash(nonce: u64) -> TxHash {
    let mut bytes = [0xee; 32];
    bytes[24..].copy_from_slice(&nonce.to_be_bytes());
    TxHash(bytes)
}

fn deployed_address(nonce: u64) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xc0;
    bytes[12..].copy_from_slice(&nonce.to_be_bytes());
    Address::new(bytes)
}

/// Constructor `(uint256 goal, uint256 durationSeconds)` read from the trailing 64 bytes.
fn create_campaign(state: &mut ChainState, owner: Address, data: &[u8]) -> Option<Address> {
    if data.len() <= 64 {
        return None;
    }
    let args = &data[data.len() - 64..];
    let goal = decode_uint(&args[..32]).ok()?;
    let duration = u64::try_from(decode_uint(&args[32..]).ok()?).ok()?;

    let address = deployed_address(state.nonce);
    state.campaigns.insert(
        address,
        MockCampaign {
            owner,
            goal,
            deadline: state.now.checked_add(duration)?,
            ..Default::default()
        },
    );
    Some(address)
}

/// Apply a call to a campaign; `false` means the transaction reverted.
fn execute(state: &mut ChainState, from: Address, to: Address, value: u128, data: &[u8]) -> bool {
    let now = state.now;
    let sender_balance = state.balances.get(&from).copied().unwrap_or(0);
    if sender_balance < value {
        return false;
    }
    let Some(campaign) = state.campaigns.get_mut(&to) else {
        return false;
    };
    if data.len() < 4 {
        return false;
    }
    let sel = &data[..4];

    let payout = if sel == selector("contribute()") {
        if value == 0 || now >= campaign.deadline {
            return false;
        }
        *campaign.contributions.entry(from).or_insert(0) += value;
        campaign.total_contributed += value;
        campaign.balance += value;
        state.balances.insert(from, sender_balance - value);
        return true;
    } else if sel == selector("withdraw()") {
        if value != 0
            || from != campaign.owner
            || !campaign.goal_reached()
            || campaign.funds_withdrawn
        {
            return false;
        }
        campaign.funds_withdrawn = true;
        std::mem::take(&mut campaign.balance)
    } else if sel == selector("refund()") {
        let contributed = campaign.contributions.get(&from).copied().unwrap_or(0);
        if value != 0 || now < campaign.deadline || campaign.goal_reached() || contributed == 0 {
            return false;
        }
        campaign.contributions.insert(from, 0);
        campaign.balance -= contributed;
        contributed
    } else {
        return false;
    };

    *state.balances.entry(from).or_insert(0) += payout;
    true
}
