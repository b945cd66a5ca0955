//! The dispatch table for every message shape the chain is known to emit

use super::registry::MessageRegistry;
use crate::proto::cosmos::{
    authz, bank, distribution, evidence, feegrant, gov, group, nft, slashing, staking, upgrade,
    vesting,
};
use crate::proto::ibc::{channel, client, connection, fee, transfer};
use crate::proto::provenance::{attribute, marker, metadata, name};
use crate::proto::wasm;

fn owned<'a>(fields: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    fields.into_iter().cloned().collect()
}

impl MessageRegistry {
    /// Registry covering the cosmos-sdk, provenance, cosmwasm and ibc modules
    pub fn standard() -> Self {
        let mut reg = Self::new();
        register_cosmos(&mut reg);
        register_provenance(&mut reg);
        register_wasm(&mut reg);
        register_ibc(&mut reg);
        reg
    }
}

fn register_cosmos(reg: &mut MessageRegistry) {
    // bank
    reg.fields::<bank::MsgSend>("bank.v1beta1.MsgSend", |m| {
        owned([&m.from_address, &m.to_address])
    });
    reg.fields::<bank::MsgMultiSend>("MsgMultiSend", |m| {
        m.inputs
            .iter()
            .map(|i| i.address.clone())
            .chain(m.outputs.iter().map(|o| o.address.clone()))
            .collect()
    });

    // distribution
    reg.fields::<distribution::MsgSetWithdrawAddress>("MsgSetWithdrawAddress", |m| {
        owned([&m.delegator_address, &m.withdraw_address])
    });
    reg.fields::<distribution::MsgWithdrawDelegatorReward>("MsgWithdrawDelegatorReward", |m| {
        owned([&m.delegator_address, &m.validator_address])
    });
    reg.fields::<distribution::MsgWithdrawValidatorCommission>(
        "MsgWithdrawValidatorCommission",
        |m| owned([&m.validator_address]),
    );
    reg.fields::<distribution::MsgFundCommunityPool>("MsgFundCommunityPool", |m| {
        owned([&m.depositor])
    });
    reg.fields::<evidence::MsgSubmitEvidence>("MsgSubmitEvidence", |m| owned([&m.submitter]));

    // gov
    reg.fields::<gov::v1beta1::MsgSubmitProposal>("gov.v1beta1.MsgSubmitProposal", |m| {
        owned([&m.proposer])
    });
    reg.nested::<gov::v1::MsgSubmitProposal>("gov.v1.MsgSubmitProposal", |m, scope| {
        let mut out = owned([&m.proposer]);
        out.extend(scope.signers_of_all(&m.messages)?);
        Ok(out)
    });
    reg.fields::<upgrade::MsgSoftwareUpgrade>("MsgSoftwareUpgrade", |m| owned([&m.authority]));
    reg.fields::<upgrade::MsgCancelUpgrade>("MsgCancelUpgrade", |m| owned([&m.authority]));
    reg.fields::<gov::v1beta1::MsgVote>("gov.v1beta1.MsgVote", |m| owned([&m.voter]));
    reg.fields::<gov::v1::MsgVote>("gov.v1.MsgVote", |m| owned([&m.voter]));
    reg.fields::<gov::v1beta1::MsgVoteWeighted>("gov.v1beta1.MsgVoteWeighted", |m| {
        owned([&m.voter])
    });
    reg.fields::<gov::v1::MsgVoteWeighted>("gov.v1.MsgVoteWeighted", |m| owned([&m.voter]));
    reg.fields::<gov::v1beta1::MsgDeposit>("gov.v1beta1.MsgDeposit", |m| owned([&m.depositor]));
    reg.fields::<gov::v1::MsgDeposit>("gov.v1.MsgDeposit", |m| owned([&m.depositor]));

    // slashing / staking
    reg.fields::<slashing::MsgUnjail>("MsgUnjail", |m| owned([&m.validator_addr]));
    reg.fields::<staking::MsgCreateValidator>("MsgCreateValidator", |m| {
        owned([&m.validator_address, &m.delegator_address])
    });
    reg.fields::<staking::MsgEditValidator>("MsgEditValidator", |m| {
        owned([&m.validator_address])
    });
    reg.fields::<staking::MsgDelegate>("MsgDelegate", |m| {
        owned([&m.validator_address, &m.delegator_address])
    });
    reg.fields::<staking::MsgBeginRedelegate>("MsgBeginRedelegate", |m| {
        owned([
            &m.delegator_address,
            &m.validator_dst_address,
            &m.validator_src_address,
        ])
    });
    reg.fields::<staking::MsgUndelegate>("MsgUndelegate", |m| {
        owned([&m.delegator_address, &m.validator_address])
    });
    reg.fields::<staking::MsgCancelUnbondingDelegation>("MsgCancelUnbondingDelegation", |m| {
        owned([&m.delegator_address, &m.validator_address])
    });

    // vesting
    reg.fields::<vesting::MsgCreateVestingAccount>("MsgCreateVestingAccount", |m| {
        owned([&m.from_address, &m.to_address])
    });
    reg.fields::<vesting::MsgCreatePermanentLockedAccount>(
        "MsgCreatePermanentLockedAccount",
        |m| owned([&m.from_address, &m.to_address]),
    );
    reg.fields::<vesting::MsgCreatePeriodicVestingAccount>(
        "MsgCreatePeriodicVestingAccount",
        |m| owned([&m.from_address, &m.to_address]),
    );

    // authz / feegrant
    reg.fields::<authz::MsgGrant>("MsgGrant", |m| owned([&m.granter, &m.grantee]));
    reg.nested::<authz::MsgExec>("authz.v1beta1.MsgExec", |m, scope| {
        let mut out = scope.signers_of_all(&m.msgs)?;
        out.push(m.grantee.clone());
        Ok(out)
    });
    reg.fields::<authz::MsgRevoke>("MsgRevoke", |m| owned([&m.granter, &m.grantee]));
    reg.fields::<feegrant::MsgGrantAllowance>("MsgGrantAllowance", |m| {
        owned([&m.granter, &m.grantee])
    });
    reg.fields::<feegrant::MsgRevokeAllowance>("MsgRevokeAllowance", |m| {
        owned([&m.granter, &m.grantee])
    });

    // group
    reg.fields::<group::MsgCreateGroup>("group.v1.MsgCreateGroup", |m| {
        std::iter::once(m.admin.clone())
            .chain(m.members.iter().map(|mem| mem.address.clone()))
            .collect()
    });
    reg.fields::<group::MsgUpdateGroupMembers>("group.v1.MsgUpdateGroupMembers", |m| {
        std::iter::once(m.admin.clone())
            .chain(m.member_updates.iter().map(|mem| mem.address.clone()))
            .collect()
    });
    reg.fields::<group::MsgUpdateGroupAdmin>("group.v1.MsgUpdateGroupAdmin", |m| {
        owned([&m.admin, &m.new_admin])
    });
    reg.fields::<group::MsgUpdateGroupMetadata>("group.v1.MsgUpdateGroupMetadata", |m| {
        owned([&m.admin])
    });
    reg.fields::<group::MsgCreateGroupPolicy>("group.v1.MsgCreateGroupPolicy", |m| {
        owned([&m.admin])
    });
    reg.fields::<group::MsgCreateGroupWithPolicy>("group.v1.MsgCreateGroupWithPolicy", |m| {
        std::iter::once(m.admin.clone())
            .chain(m.members.iter().map(|mem| mem.address.clone()))
            .collect()
    });
    reg.fields::<group::MsgUpdateGroupPolicyAdmin>("group.v1.MsgUpdateGroupPolicyAdmin", |m| {
        owned([&m.admin, &m.group_policy_address, &m.new_admin])
    });
    reg.fields::<group::MsgUpdateGroupPolicyDecisionPolicy>(
        "group.v1.MsgUpdateGroupPolicyDecisionPolicy",
        |m| owned([&m.admin, &m.group_policy_address]),
    );
    reg.fields::<group::MsgUpdateGroupPolicyMetadata>(
        "group.v1.MsgUpdateGroupPolicyMetadata",
        |m| owned([&m.admin, &m.group_policy_address]),
    );
    reg.nested::<group::MsgSubmitProposal>("group.v1.MsgSubmitProposal", |m, scope| {
        let mut out = owned([&m.group_policy_address]);
        out.extend(m.proposers.iter().cloned());
        out.extend(scope.signers_of_all(&m.messages)?);
        Ok(out)
    });
    reg.fields::<group::MsgWithdrawProposal>("group.v1.MsgWithdrawProposal", |m| {
        owned([&m.address])
    });
    reg.fields::<group::MsgVote>("group.v1.MsgVote", |m| owned([&m.voter]));
    reg.fields::<group::MsgExec>("group.v1.MsgExec", |m| owned([&m.executor]));
    reg.fields::<group::MsgLeaveGroup>("group.v1.MsgLeaveGroup", |m| owned([&m.address]));

    reg.fields::<nft::MsgSend>("nft.v1beta1.MsgSend", |m| owned([&m.sender, &m.receiver]));
}

fn register_provenance(reg: &mut MessageRegistry) {
    // marker
    reg.fields::<marker::MsgWithdrawRequest>("MsgWithdrawRequest", |m| {
        owned([&m.to_address, &m.administrator])
    });
    reg.fields::<marker::MsgAddMarkerRequest>("MsgAddMarkerRequest", |m| {
        owned([&m.from_address, &m.manager])
            .into_iter()
            .chain(m.access_list.iter().map(|acc| acc.address.clone()))
            .collect()
    });
    reg.fields::<marker::MsgAddAccessRequest>("MsgAddAccessRequest", |m| {
        m.access
            .iter()
            .map(|acc| acc.address.clone())
            .chain(std::iter::once(m.administrator.clone()))
            .collect()
    });
    reg.fields::<marker::MsgDeleteAccessRequest>("MsgDeleteAccessRequest", |m| {
        owned([&m.administrator, &m.removed_address])
    });
    reg.fields::<marker::MsgFinalizeRequest>("MsgFinalizeRequest", |m| owned([&m.administrator]));
    reg.fields::<marker::MsgActivateRequest>("MsgActivateRequest", |m| owned([&m.administrator]));
    reg.fields::<marker::MsgCancelRequest>("MsgCancelRequest", |m| owned([&m.administrator]));
    reg.fields::<marker::MsgDeleteRequest>("MsgDeleteRequest", |m| owned([&m.administrator]));
    reg.fields::<marker::MsgMintRequest>("MsgMintRequest", |m| owned([&m.administrator]));
    reg.fields::<marker::MsgBurnRequest>("MsgBurnRequest", |m| owned([&m.administrator]));
    reg.fields::<marker::MsgTransferRequest>("MsgTransferRequest", |m| {
        owned([&m.administrator, &m.to_address, &m.from_address])
    });
    reg.fields::<marker::MsgSetDenomMetadataRequest>("MsgSetDenomMetadataRequest", |m| {
        owned([&m.administrator])
    });
    reg.fields::<marker::MsgIbcTransferRequest>("MsgIbcTransferRequest", |m| {
        vec![
            m.administrator.clone(),
            m.transfer
                .as_ref()
                .map(|t| t.sender.clone())
                .unwrap_or_default(),
        ]
    });
    reg.fields::<marker::MsgGrantAllowanceRequest>("MsgGrantAllowanceRequest", |m| {
        owned([&m.administrator, &m.grantee])
    });

    // name
    reg.fields::<name::MsgBindNameRequest>("MsgBindNameRequest", |m| {
        let address = |r: &Option<name::NameRecord>| {
            r.as_ref().map(|r| r.address.clone()).unwrap_or_default()
        };
        vec![address(&m.parent), address(&m.record)]
    });
    reg.fields::<name::MsgDeleteNameRequest>("MsgDeleteNameRequest", |m| {
        vec![m.record.as_ref().map(|r| r.address.clone()).unwrap_or_default()]
    });

    // attribute
    reg.fields::<attribute::MsgAddAttributeRequest>("MsgAddAttributeRequest", |m| {
        owned([&m.account, &m.owner])
    });
    reg.fields::<attribute::MsgDeleteAttributeRequest>("MsgDeleteAttributeRequest", |m| {
        owned([&m.account, &m.owner])
    });
    reg.fields::<attribute::MsgUpdateAttributeRequest>("MsgUpdateAttributeRequest", |m| {
        owned([&m.account, &m.owner])
    });
    reg.fields::<attribute::MsgDeleteDistinctAttributeRequest>(
        "MsgDeleteDistinctAttributeRequest",
        |m| owned([&m.account, &m.owner]),
    );

    // metadata
    reg.fields::<metadata::MsgP8eMemorializeContractRequest>(
        "MsgP8eMemorializeContractRequest",
        |m| owned([&m.invoker]),
    );
    reg.fields::<metadata::MsgWriteP8eContractSpecRequest>("MsgWriteP8eContractSpecRequest", |m| {
        owned(&m.signers)
    });
    reg.fields::<metadata::MsgWriteScopeRequest>("MsgWriteScopeRequest", |m| {
        let scope = m.scope.clone().unwrap_or_default();
        owned(&m.signers)
            .into_iter()
            .chain(scope.owners.into_iter().map(|o| o.address))
            .chain(std::iter::once(scope.value_owner_address))
            .collect()
    });
    reg.fields::<metadata::MsgDeleteScopeRequest>("MsgDeleteScopeRequest", |m| owned(&m.signers));
    reg.fields::<metadata::MsgWriteSessionRequest>("MsgWriteSessionRequest", |m| {
        let parties = m.session.as_ref().map(|s| s.parties.as_slice()).unwrap_or_default();
        owned(&m.signers)
            .into_iter()
            .chain(parties.iter().map(|p| p.address.clone()))
            .collect()
    });
    reg.fields::<metadata::MsgWriteRecordRequest>("MsgWriteRecordRequest", |m| {
        owned(&m.signers)
            .into_iter()
            .chain(m.parties.iter().map(|p| p.address.clone()))
            .collect()
    });
    reg.fields::<metadata::MsgDeleteRecordRequest>("MsgDeleteRecordRequest", |m| owned(&m.signers));
    reg.fields::<metadata::MsgWriteScopeSpecificationRequest>(
        "MsgWriteScopeSpecificationRequest",
        spec_signers_and_owners,
    );
    reg.fields::<metadata::MsgDeleteScopeSpecificationRequest>(
        "MsgDeleteScopeSpecificationRequest",
        |m| owned(&m.signers),
    );
    reg.fields::<metadata::MsgWriteContractSpecificationRequest>(
        "MsgWriteContractSpecificationRequest",
        spec_signers_and_owners,
    );
    reg.fields::<metadata::MsgDeleteContractSpecificationRequest>(
        "MsgDeleteContractSpecificationRequest",
        |m| owned(&m.signers),
    );
    reg.fields::<metadata::MsgWriteRecordSpecificationRequest>(
        "MsgWriteRecordSpecificationRequest",
        |m| owned(&m.signers),
    );
    reg.fields::<metadata::MsgDeleteRecordSpecificationRequest>(
        "MsgDeleteRecordSpecificationRequest",
        |m| owned(&m.signers),
    );
    reg.fields::<metadata::MsgBindOSLocatorRequest>("MsgBindOSLocatorRequest", locator_owner);
    reg.fields::<metadata::MsgDeleteOSLocatorRequest>("MsgDeleteOSLocatorRequest", locator_owner);
    reg.fields::<metadata::MsgModifyOSLocatorRequest>("MsgModifyOSLocatorRequest", locator_owner);
    reg.fields::<metadata::MsgAddScopeDataAccessRequest>("MsgAddScopeDataAccessRequest", |m| {
        owned(m.signers.iter().chain(&m.data_access))
    });
    reg.fields::<metadata::MsgDeleteScopeDataAccessRequest>(
        "MsgDeleteScopeDataAccessRequest",
        |m| owned(m.signers.iter().chain(&m.data_access)),
    );
    reg.fields::<metadata::MsgAddScopeOwnerRequest>("MsgAddScopeOwnerRequest", |m| {
        m.owners
            .iter()
            .map(|o| o.address.clone())
            .chain(m.signers.iter().cloned())
            .collect()
    });
    reg.fields::<metadata::MsgDeleteScopeOwnerRequest>("MsgDeleteScopeOwnerRequest", |m| {
        owned(m.owners.iter().chain(&m.signers))
    });
    reg.fields::<metadata::MsgAddContractSpecToScopeSpecRequest>(
        "MsgAddContractSpecToScopeSpecRequest",
        |m| owned(&m.signers),
    );
    reg.fields::<metadata::MsgDeleteContractSpecFromScopeSpecRequest>(
        "MsgDeleteContractSpecFromScopeSpecRequest",
        |m| owned(&m.signers),
    );
}

fn spec_signers_and_owners(m: &metadata::MsgWriteScopeSpecificationRequest) -> Vec<String> {
    let owners = m
        .specification
        .as_ref()
        .map(|s| s.owner_addresses.as_slice())
        .unwrap_or_default();
    owned(m.signers.iter().chain(owners))
}

fn locator_owner(m: &metadata::MsgBindOSLocatorRequest) -> Vec<String> {
    vec![m.locator.as_ref().map(|l| l.owner.clone()).unwrap_or_default()]
}

fn register_wasm(reg: &mut MessageRegistry) {
    reg.fields::<wasm::v1::MsgStoreCode>("wasm.v1.MsgStoreCode", |m| owned([&m.sender]));
    reg.fields::<wasm::v1::MsgInstantiateContract>("wasm.v1.MsgInstantiateContract", |m| {
        owned([&m.sender, &m.admin])
    });
    reg.fields::<wasm::v1::MsgInstantiateContract2>("wasm.v1.MsgInstantiateContract2", |m| {
        owned([&m.sender, &m.admin])
    });
    reg.fields::<wasm::v1::MsgExecuteContract>("wasm.v1.MsgExecuteContract", |m| {
        owned([&m.sender])
    });
    reg.fields::<wasm::v1::MsgMigrateContract>("wasm.v1.MsgMigrateContract", |m| {
        owned([&m.sender])
    });
    reg.fields::<wasm::v1::MsgUpdateAdmin>("wasm.v1.MsgUpdateAdmin", |m| {
        owned([&m.sender, &m.new_admin])
    });
    reg.fields::<wasm::v1::MsgClearAdmin>("wasm.v1.MsgClearAdmin", |m| owned([&m.sender]));

    reg.fields::<wasm::v1beta1::MsgStoreCode>("wasm.v1beta1.MsgStoreCode", |m| {
        owned([&m.sender])
    });
    reg.fields::<wasm::v1beta1::MsgInstantiateContract>(
        "wasm.v1beta1.MsgInstantiateContract",
        |m| owned([&m.sender, &m.admin]),
    );
    reg.fields::<wasm::v1beta1::MsgExecuteContract>("wasm.v1beta1.MsgExecuteContract", |m| {
        owned([&m.sender])
    });
    reg.fields::<wasm::v1beta1::MsgMigrateContract>("wasm.v1beta1.MsgMigrateContract", |m| {
        owned([&m.sender])
    });
    reg.fields::<wasm::v1beta1::MsgUpdateAdmin>("wasm.v1beta1.MsgUpdateAdmin", |m| {
        owned([&m.sender, &m.new_admin])
    });
    reg.fields::<wasm::v1beta1::MsgClearAdmin>("wasm.v1beta1.MsgClearAdmin", |m| {
        owned([&m.sender])
    });
}

fn register_ibc(reg: &mut MessageRegistry) {
    reg.fields::<transfer::MsgTransfer>("MsgTransfer", |m| owned([&m.sender]));

    reg.fields::<channel::MsgChannelOpenInit>("MsgChannelOpenInit", |m| owned([&m.signer]));
    reg.fields::<channel::MsgChannelOpenTry>("MsgChannelOpenTry", |m| owned([&m.signer]));
    reg.fields::<channel::MsgChannelOpenAck>("MsgChannelOpenAck", |m| owned([&m.signer]));
    reg.fields::<channel::MsgChannelOpenConfirm>("MsgChannelOpenConfirm", |m| owned([&m.signer]));
    reg.fields::<channel::MsgChannelCloseInit>("MsgChannelCloseInit", |m| owned([&m.signer]));
    reg.fields::<channel::MsgChannelCloseConfirm>("MsgChannelCloseConfirm", |m| {
        owned([&m.signer])
    });
    reg.fields::<channel::MsgRecvPacket>("MsgRecvPacket", |m| owned([&m.signer]));
    reg.fields::<channel::MsgTimeout>("MsgTimeout", |m| owned([&m.signer]));
    reg.fields::<channel::MsgTimeoutOnClose>("MsgTimeoutOnClose", |m| owned([&m.signer]));
    reg.fields::<channel::MsgAcknowledgement>("MsgAcknowledgement", |m| owned([&m.signer]));

    reg.fields::<client::MsgCreateClient>("MsgCreateClient", |m| owned([&m.signer]));
    reg.fields::<client::MsgUpdateClient>("MsgUpdateClient", |m| owned([&m.signer]));
    reg.fields::<client::MsgUpgradeClient>("MsgUpgradeClient", |m| owned([&m.signer]));
    reg.fields::<client::MsgSubmitMisbehaviour>("MsgSubmitMisbehaviour", |m| owned([&m.signer]));

    reg.fields::<connection::MsgConnectionOpenInit>("MsgConnectionOpenInit", |m| {
        owned([&m.signer])
    });
    reg.fields::<connection::MsgConnectionOpenTry>("MsgConnectionOpenTry", |m| {
        owned([&m.signer])
    });
    reg.fields::<connection::MsgConnectionOpenAck>("MsgConnectionOpenAck", |m| {
        owned([&m.signer])
    });
    reg.fields::<connection::MsgConnectionOpenConfirm>("MsgConnectionOpenConfirm", |m| {
        owned([&m.signer])
    });

    reg.fields::<fee::MsgRegisterPayee>("MsgRegisterPayee", |m| owned([&m.relayer, &m.payee]));
    reg.fields::<fee::MsgRegisterCounterpartyPayee>("MsgRegisterCounterpartyPayee", |m| {
        owned([&m.relayer])
    });
    reg.fields::<fee::MsgPayPacketFee>("MsgPayPacketFee", |m| {
        owned(std::iter::once(&m.signer).chain(&m.relayers))
    });
    reg.fields::<fee::MsgPayPacketFeeAsync>("MsgPayPacketFeeAsync", |m| {
        let packet_fee = m.packet_fee.clone().unwrap_or_default();
        std::iter::once(packet_fee.refund_address)
            .chain(packet_fee.relayers)
            .collect()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::MessageEnvelope;

    fn standard() -> MessageRegistry {
        MessageRegistry::standard()
    }

    #[test]
    fn test_multi_send_order_and_duplicates() {
        let msg = bank::MsgMultiSend {
            inputs: vec![
                bank::Input { address: "pb1alice".to_string() },
                bank::Input { address: "pb1bob".to_string() },
            ],
            outputs: vec![
                bank::Output { address: "pb1carol".to_string() },
                bank::Output { address: "pb1alice".to_string() },
                bank::Output { address: "pb1dave".to_string() },
            ],
        };
        let env = MessageEnvelope::pack("/cosmos.bank.v1beta1.MsgMultiSend", &msg);

        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pb1alice", "pb1bob", "pb1carol", "pb1alice", "pb1dave"]
        );
    }

    #[test]
    fn test_unknown_type_is_empty() {
        let env = MessageEnvelope {
            type_url: "/provenance.exchange.v1.MsgCreateAskRequest".to_string(),
            value: vec![1, 2, 3],
        };
        assert!(standard().signers_of(&env).unwrap().is_empty());
    }

    #[test]
    fn test_delegate_lists_validator_first() {
        let env = MessageEnvelope::pack(
            "/cosmos.staking.v1beta1.MsgDelegate",
            &staking::MsgDelegate {
                delegator_address: "pb1delegator".to_string(),
                validator_address: "pbvaloper1val".to_string(),
            },
        );
        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pbvaloper1val", "pb1delegator"]
        );
    }

    #[test]
    fn test_undelegate_not_confused_with_delegate() {
        let env = MessageEnvelope::pack(
            "/cosmos.staking.v1beta1.MsgUndelegate",
            &staking::MsgUndelegate {
                delegator_address: "pb1delegator".to_string(),
                validator_address: "pbvaloper1val".to_string(),
            },
        );
        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pb1delegator", "pbvaloper1val"]
        );
    }

    #[test]
    fn test_wasm_versions_dispatch_separately() {
        let reg = standard();
        assert!(reg.is_known("/cosmwasm.wasm.v1.MsgStoreCode"));
        assert!(reg.is_known("/cosmwasm.wasm.v1beta1.MsgStoreCode"));
        assert!(!reg.is_known("/cosmwasm.wasm.v2.MsgStoreCode"));

        let env = MessageEnvelope::pack(
            "/cosmwasm.wasm.v1.MsgInstantiateContract",
            &wasm::v1::MsgInstantiateContract {
                sender: "pb1sender".to_string(),
                admin: "pb1admin".to_string(),
            },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1sender", "pb1admin"]);
    }

    #[test]
    fn test_nft_send_is_not_bank_send() {
        let env = MessageEnvelope::pack(
            "/cosmos.nft.v1beta1.MsgSend",
            &nft::MsgSend {
                sender: "pb1sender".to_string(),
                receiver: "pb1receiver".to_string(),
            },
        );
        assert_eq!(standard().signers_of(&env).unwrap(), vec!["pb1sender", "pb1receiver"]);
    }

    #[test]
    fn test_authz_exec_recurses_then_grantee() {
        let inner = MessageEnvelope::pack(
            "/cosmos.bank.v1beta1.MsgSend",
            &bank::MsgSend {
                from_address: "pb1granter".to_string(),
                to_address: "pb1recipient".to_string(),
            },
        );
        let unknown = MessageEnvelope {
            type_url: "/some.new.v1.MsgThing".to_string(),
            value: vec![],
        };
        let env = MessageEnvelope::pack(
            "/cosmos.authz.v1beta1.MsgExec",
            &authz::MsgExec {
                grantee: "pb1grantee".to_string(),
                msgs: vec![inner, unknown],
            },
        );
        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pb1granter", "pb1recipient", "pb1grantee"]
        );
    }

    #[test]
    fn test_gov_v1_proposal_recurses_after_proposer() {
        let inner = MessageEnvelope::pack(
            "/cosmos.upgrade.v1beta1.MsgSoftwareUpgrade",
            &upgrade::MsgSoftwareUpgrade { authority: "pb1gov".to_string() },
        );
        let env = MessageEnvelope::pack(
            "/cosmos.gov.v1.MsgSubmitProposal",
            &gov::v1::MsgSubmitProposal {
                messages: vec![inner],
                proposer: "pb1proposer".to_string(),
            },
        );
        assert_eq!(standard().signers_of(&env).unwrap(), vec!["pb1proposer", "pb1gov"]);
    }

    #[test]
    fn test_group_proposal_order() {
        let inner = MessageEnvelope::pack(
            "/cosmos.group.v1.MsgLeaveGroup",
            &group::MsgLeaveGroup { address: "pb1leaver".to_string() },
        );
        let env = MessageEnvelope::pack(
            "/cosmos.group.v1.MsgSubmitProposal",
            &group::MsgSubmitProposal {
                group_policy_address: "pb1policy".to_string(),
                proposers: vec!["pb1p1".to_string(), "pb1p2".to_string()],
                messages: vec![inner],
            },
        );
        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pb1policy", "pb1p1", "pb1p2", "pb1leaver"]
        );
    }

    #[test]
    fn test_group_vote_not_gov_vote() {
        let reg = standard();
        let env = MessageEnvelope::pack(
            "/cosmos.group.v1.MsgVote",
            &group::MsgVote { proposal_id: 3, voter: "pb1member".to_string() },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1member"]);

        let env = MessageEnvelope::pack(
            "/cosmos.gov.v1.MsgVote",
            &gov::v1::MsgVote { proposal_id: 3, voter: "pb1voter".to_string() },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1voter"]);
    }

    #[test]
    fn test_write_scope_signers_owners_value_owner() {
        let env = MessageEnvelope::pack(
            "/provenance.metadata.v1.MsgWriteScopeRequest",
            &metadata::MsgWriteScopeRequest {
                scope: Some(metadata::Scope {
                    owners: vec![metadata::Party { address: "pb1owner".to_string() }],
                    data_access: vec!["pb1reader".to_string()],
                    value_owner_address: "pb1value".to_string(),
                }),
                signers: vec!["pb1signer".to_string()],
            },
        );
        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pb1signer", "pb1owner", "pb1value"]
        );
    }

    #[test]
    fn test_marker_transfer_order() {
        let env = MessageEnvelope::pack(
            "/provenance.marker.v1.MsgTransferRequest",
            &marker::MsgTransferRequest {
                administrator: "pb1admin".to_string(),
                from_address: "pb1from".to_string(),
                to_address: "pb1to".to_string(),
            },
        );
        assert_eq!(
            standard().signers_of(&env).unwrap(),
            vec!["pb1admin", "pb1to", "pb1from"]
        );
    }

    #[test]
    fn test_marker_ibc_transfer_and_plain_transfer() {
        let reg = standard();
        let env = MessageEnvelope::pack(
            "/provenance.marker.v1.MsgIbcTransferRequest",
            &marker::MsgIbcTransferRequest {
                transfer: Some(transfer::MsgTransfer { sender: "pb1sender".to_string() }),
                administrator: "pb1admin".to_string(),
            },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1admin", "pb1sender"]);

        let env = MessageEnvelope::pack(
            "/ibc.applications.transfer.v1.MsgTransfer",
            &transfer::MsgTransfer { sender: "pb1relay".to_string() },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1relay"]);
    }

    #[test]
    fn test_ibc_signer_tags() {
        let reg = standard();
        let env = MessageEnvelope::pack(
            "/ibc.core.connection.v1.MsgConnectionOpenTry",
            &connection::MsgConnectionOpenTry { signer: "pb1relayer".to_string() },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1relayer"]);

        let env = MessageEnvelope::pack(
            "/ibc.core.channel.v1.MsgTimeoutOnClose",
            &channel::MsgTimeoutOnClose { signer: "pb1relayer".to_string() },
        );
        assert_eq!(reg.signers_of(&env).unwrap(), vec!["pb1relayer"]);
    }

    #[test]
    fn test_pay_packet_fee_async_missing_fee() {
        let env = MessageEnvelope::pack(
            "/ibc.applications.fee.v1.MsgPayPacketFeeAsync",
            &fee::MsgPayPacketFeeAsync { packet_fee: None },
        );
        assert_eq!(standard().signers_of(&env).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_registry_is_broad() {
        assert!(standard().len() > 100);
    }
}
