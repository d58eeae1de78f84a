//! ADRS (address) structure for domain separation.
//!
//! Every hash call in SLH-DSA receives a 32-byte structured address so that
//! otherwise identical inputs produce independent outputs. The layout
//! follows FIPS 205, Section 4.2:
//!
//! - Bytes 0-3: layer address (big-endian u32)
//! - Bytes 4-15: tree address (big-endian, 96 bits)
//! - Bytes 16-19: type
//! - Bytes 20-31: three type-dependent words (key pair / chain / hash, or
//!   key pair / tree height / tree index)
//!
//! SHA-2 parameter sets hash a 22-byte compressed form instead; see
//! [`Address::compressed`].

use crate::index::TreeIndex;

/// ADRS type constants as defined in FIPS 205, Table 1.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdrsType {
    /// WOTS+ chain hashing.
    WotsHash = 0,
    /// WOTS+ public key compression.
    WotsPk = 1,
    /// Merkle tree node hashing.
    Tree = 2,
    /// FORS tree node hashing.
    ForsTree = 3,
    /// FORS root compression.
    ForsRoots = 4,
    /// WOTS+ secret key generation.
    WotsPrf = 5,
    /// FORS secret key generation.
    ForsPrf = 6,
}

/// 32-byte structured address word.
#[derive(Clone, Copy, Default)]
pub struct Address {
    bytes: [u8; 32],
}

impl Address {
    /// Create a new zeroed address.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: [0u8; 32] }
    }

    /// The full 32-byte big-endian serialization.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// The 22-byte compressed form used by the SHA-2 hash suites:
    /// low byte of layer, tree bytes 8..16, low byte of type, and the
    /// twelve trailing bytes.
    #[must_use]
    pub fn compressed(&self) -> [u8; 22] {
        let mut out = [0u8; 22];
        out[0] = self.bytes[3];
        out[1..9].copy_from_slice(&self.bytes[8..16]);
        out[9] = self.bytes[19];
        out[10..22].copy_from_slice(&self.bytes[20..32]);
        out
    }

    /// Set the layer address (bytes 0-3).
    pub fn set_layer(&mut self, layer: u32) {
        self.bytes[0..4].copy_from_slice(&layer.to_be_bytes());
    }

    /// Get the layer address.
    #[must_use]
    pub fn layer(&self) -> u32 {
        u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// Set the 96-bit tree address (bytes 4-15).
    pub fn set_tree(&mut self, tree: TreeIndex) {
        self.bytes[4..16].copy_from_slice(&tree.to_bytes());
    }

    /// Get the tree address.
    #[must_use]
    pub fn tree(&self) -> TreeIndex {
        TreeIndex::from_bytes(&self.bytes[4..16])
    }

    /// Change the address type and zero the trailing twelve bytes.
    ///
    /// FIPS 205's setTypeAndClear: every type change invalidates the three
    /// trailing words, so they are cleared unconditionally. Callers that
    /// need `key_pair` across a type change copy it back explicitly, as the
    /// algorithms specify.
    pub fn set_type_and_clear(&mut self, adrs_type: AdrsType) {
        self.bytes[16..20].copy_from_slice(&(adrs_type as u32).to_be_bytes());
        self.bytes[20..32].fill(0);
    }

    /// Get the address type word.
    #[must_use]
    pub fn adrs_type(&self) -> u32 {
        u32::from_be_bytes([
            self.bytes[16],
            self.bytes[17],
            self.bytes[18],
            self.bytes[19],
        ])
    }

    /// Copy of this address re-typed with cleared trailing words.
    #[must_use]
    pub fn with_type(&self, adrs_type: AdrsType) -> Self {
        let mut copy = *self;
        copy.set_type_and_clear(adrs_type);
        copy
    }

    /// Set the key pair address (bytes 20-23).
    pub fn set_key_pair(&mut self, key_pair: u32) {
        self.bytes[20..24].copy_from_slice(&key_pair.to_be_bytes());
    }

    /// Get the key pair address.
    #[must_use]
    pub fn key_pair(&self) -> u32 {
        u32::from_be_bytes([
            self.bytes[20],
            self.bytes[21],
            self.bytes[22],
            self.bytes[23],
        ])
    }

    /// Set the chain address (bytes 24-27, WOTS+ types).
    pub fn set_chain(&mut self, chain: u32) {
        self.bytes[24..28].copy_from_slice(&chain.to_be_bytes());
    }

    /// Set the hash address (bytes 28-31, WOTS+ chain hashing).
    pub fn set_hash(&mut self, hash: u32) {
        self.bytes[28..32].copy_from_slice(&hash.to_be_bytes());
    }

    /// Set the tree height (bytes 24-27, tree types).
    pub fn set_tree_height(&mut self, height: u32) {
        self.bytes[24..28].copy_from_slice(&height.to_be_bytes());
    }

    /// Get the tree height.
    #[must_use]
    pub fn tree_height(&self) -> u32 {
        u32::from_be_bytes([
            self.bytes[24],
            self.bytes[25],
            self.bytes[26],
            self.bytes[27],
        ])
    }

    /// Set the tree index (bytes 28-31, tree types).
    pub fn set_tree_index(&mut self, index: u32) {
        self.bytes[28..32].copy_from_slice(&index.to_be_bytes());
    }

    /// Get the tree index.
    #[must_use]
    pub fn tree_index(&self) -> u32 {
        u32::from_be_bytes([
            self.bytes[28],
            self.bytes[29],
            self.bytes[30],
            self.bytes[31],
        ])
    }
}

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Address")
            .field("layer", &self.layer())
            .field("tree", &self.tree())
            .field("type", &self.adrs_type())
            .field("key_pair", &self.key_pair())
            .finish()
    }
}
