//! Endpoints advertised on the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub summary: &'static str,
}

impl Endpoint {
    const fn get(path: &'static str, summary: &'static str) -> Self {
        Self { method: HttpMethod::Get, path, summary }
    }

    const fn post(path: &'static str, summary: &'static str) -> Self {
        Self { method: HttpMethod::Post, path, summary }
    }

    /// A new tab can only issue a GET, so only those get an open button.
    pub fn is_openable(&self) -> bool {
        self.method == HttpMethod::Get
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointGroup {
    pub title: &'static str,
    pub endpoints: &'static [Endpoint],
}

const DAEMON: &[Endpoint] = &[
    Endpoint::get("/daemon/get_version", "Daemon RPC version"),
    Endpoint::get("/daemon/get_info", "General network and node information"),
    Endpoint::get("/daemon/hard_fork_info", "Current hard fork voting state"),
    Endpoint::get("/daemon/get_block", "Block by `hash` or `height`"),
    Endpoint::get("/daemon/get_block_count", "Current chain height"),
    Endpoint::get("/daemon/get_last_block_header", "Header of the most recent block"),
    Endpoint::get("/daemon/get_block_header_by_hash", "Block header by `hash`"),
    Endpoint::get("/daemon/get_block_header_by_height", "Block header by `height`"),
    Endpoint::get("/daemon/get_block_headers_range", "Headers from `start_height` to `end_height`"),
    Endpoint::get("/daemon/get_block_template", "Mining template for `wallet_address`"),
    Endpoint::get("/daemon/get_connections", "Peer connections of the node"),
    Endpoint::get("/daemon/get_fee_estimate", "Per-byte fee estimate"),
    Endpoint::get("/daemon/get_generated_coins", "Total coins emitted so far"),
    Endpoint::get("/daemon/get_bans", "Banned peers"),
    Endpoint::post("/daemon/set_bans", "Ban or unban peers"),
    Endpoint::get("/daemon/get_transaction_pool", "Transactions in the mempool"),
    Endpoint::get("/daemon/get_transaction_pool_stats", "Mempool statistics"),
    Endpoint::get("/daemon/get_transactions", "Transactions by `txs_hashes`"),
    Endpoint::post("/daemon/decode_outputs", "Decode outputs owned by a view key"),
    Endpoint::get("/daemon/get_transaction_pubkey", "Public key of a transaction"),
];

const MARKET: &[Endpoint] = &[
    Endpoint::get("/market/nonkyc", "NonKYC exchange pairs"),
    Endpoint::get("/market/cexswap", "CEXSwap exchange pairs"),
];

pub const GROUPS: &[EndpointGroup] = &[
    EndpointGroup { title: "Daemon", endpoints: DAEMON },
    EndpointGroup { title: "Market", endpoints: MARKET },
];

/// Joins the API base and an endpoint path with exactly one `/`.
/// An empty base leaves the path relative to the page origin.
pub fn endpoint_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
