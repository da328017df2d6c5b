use multiversx_sc::proxy_imports::*;

pub struct BadgeRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BadgeRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BadgeRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BadgeRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct BadgeRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> BadgeRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        minter: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&minter)
            .original_result()
    }
}

impl<Env, From, To, Gas> BadgeRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn mint<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        to: Arg0,
        mission_id: Arg1,
        metadata_ref: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mint")
            .argument(&to)
            .argument(&mission_id)
            .argument(&metadata_ref)
            .original_result()
    }

    pub fn get_info<Arg0: ProxyArg<u64>>(
        self,
        badge_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<u64, ManagedBuffer<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInfo")
            .argument(&badge_id)
            .original_result()
    }

    pub fn get_badge_holder<Arg0: ProxyArg<u64>>(
        self,
        badge_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBadgeHolder")
            .argument(&badge_id)
            .original_result()
    }
}
