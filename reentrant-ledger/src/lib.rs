#![no_std]

multiversx_sc::imports!();

/// Reward ledger stand-in for tests. It accepts ledgers and deposits like
/// the real one, but `transfer` calls straight back into the paying
/// contract's `submitAttestation` before returning.
#[multiversx_sc::contract]
pub trait ReentrantLedger {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(createLedger)]
    fn create_ledger(
        &self,
        _underlying_asset: TokenIdentifier,
        _transferable: bool,
        _merchants: ManagedVec<ManagedAddress>,
    ) -> u64 {
        self.ledger_count().update(|count| {
            *count += 1;
            *count
        })
    }

    #[endpoint(mint)]
    #[payable("*")]
    fn mint(&self, _ledger_id: u64) {}

    #[endpoint(transfer)]
    fn transfer(&self, ledger_id: u64, to: ManagedAddress, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        let data_hash = ManagedBuffer::new_from_bytes(&[0u8; 32]);

        self.tx()
            .to(&caller)
            .raw_call("submitAttestation")
            .argument(&to)
            .argument(&ledger_id)
            .argument(&0u32)
            .argument(&data_hash)
            .argument(&amount)
            .argument(&to)
            .argument(&ManagedBuffer::new())
            .sync_call();

        true
    }

    #[storage_mapper("ledgerCount")]
    fn ledger_count(&self) -> SingleValueMapper<u64>;
}
