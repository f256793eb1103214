use crate::fixture::{tokens, Fixture, DAY, HOUR};
use lattice_staking_contracts::errors::StakingError;
use lattice_staking_contracts::events::Deposit;
use odra::casper_types::U256;
use pretty_assertions::assert_eq;

#[test]
fn test_deposit_records_stake_and_totals() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(5_000), tokens(5_000));

    f.deposit_as(f.alice, project_id, 1, tokens(1_500)).unwrap();

    assert_eq!(f.pool.get_amount_staked_by_user_in_pool(project_id, 1, f.alice), tokens(1_500));
    assert_eq!(f.pool.get_total_amount_staked_in_pool(project_id, 1), tokens(1_500));
    assert_eq!(f.pool.get_total_amount_staked_in_project(project_id), tokens(1_500));
    assert_eq!(f.pool.number_of_stakers(project_id, 1), 1);
    assert!(!f.pool.did_user_withdraw_funds(project_id, 1, f.alice));

    assert_eq!(f.token.balance_of(f.alice), tokens(3_500));
    assert_eq!(f.token.balance_of(f.pool_address()), tokens(1_500));
    assert_eq!(f.pool.get_held_balance(), tokens(1_500));

    assert!(f.env.emitted_event(
        &f.pool,
        Deposit {
            user: f.alice,
            project_id,
            pool_id: 1,
            amount: tokens(1_500),
        }
    ));
}

#[test]
fn test_repeat_deposits_accumulate_and_register_once() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(5_000), tokens(5_000));

    f.deposit_as(f.alice, project_id, 1, tokens(1_000)).unwrap();
    f.deposit_as(f.alice, project_id, 1, tokens(2_000)).unwrap();

    assert_eq!(f.pool.get_amount_staked_by_user_in_pool(project_id, 1, f.alice), tokens(3_000));
    assert_eq!(f.pool.get_total_amount_staked_in_pool(project_id, 1), tokens(3_000));
    assert_eq!(f.pool.number_of_stakers(project_id, 1), 1);
}

#[test]
fn test_project_total_spans_pools() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(10_000), tokens(10_000));
    f.fund(f.bob, tokens(10_000), tokens(10_000));

    f.deposit_as(f.alice, project_id, 1, tokens(1_000)).unwrap();
    f.deposit_as(f.bob, project_id, 2, tokens(6_000)).unwrap();

    assert_eq!(f.pool.get_total_amount_staked_in_pool(project_id, 1), tokens(1_000));
    assert_eq!(f.pool.get_total_amount_staked_in_pool(project_id, 2), tokens(6_000));
    assert_eq!(f.pool.get_total_amount_staked_in_project(project_id), tokens(7_000));
}

#[test]
fn test_deposit_exactly_at_start_succeeds() {
    let mut f = Fixture::new();
    let start = f.now() + HOUR;
    let project_id = f.create_project("project-a", start, start + DAY);
    f.create_pool(project_id, tokens(100));
    f.fund(f.alice, tokens(100), tokens(100));

    f.advance_to(start);
    assert_eq!(f.now(), start);
    assert_eq!(f.deposit_as(f.alice, project_id, 0, tokens(10)), Ok(()));
}

#[test]
fn test_deposit_before_start_fails() {
    let mut f = Fixture::new();
    let start = f.now() + HOUR;
    let project_id = f.create_project("project-a", start, start + DAY);
    f.create_pool(project_id, tokens(100));
    f.fund(f.alice, tokens(100), tokens(100));

    assert_eq!(
        f.deposit_as(f.alice, project_id, 0, tokens(10)),
        Err(StakingError::StakingNotYetOpen.into())
    );
}

#[test]
fn test_deposit_at_end_fails() {
    let mut f = Fixture::new();
    let start = f.now() + HOUR;
    let end = start + DAY;
    let project_id = f.create_project("project-a", start, end);
    f.create_pool(project_id, tokens(100));
    f.fund(f.alice, tokens(100), tokens(100));

    f.advance_to(end);
    assert_eq!(
        f.deposit_as(f.alice, project_id, 0, tokens(10)),
        Err(StakingError::StakingClosed.into())
    );
}

#[test]
fn test_deposit_after_disable_fails() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(100), tokens(100));

    f.pool.disable_project(project_id);
    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, tokens(10)),
        Err(StakingError::StakingClosed.into())
    );
}

#[test]
fn test_zero_amount_fails() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();

    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, U256::zero()),
        Err(StakingError::AmountNotSpecified.into())
    );
}

#[test]
fn test_invalid_ids_fail() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(100), tokens(100));

    assert_eq!(
        f.deposit_as(f.alice, 5, 0, tokens(10)),
        Err(StakingError::ProjectNotFound.into())
    );
    assert_eq!(
        f.deposit_as(f.alice, project_id, 3, tokens(10)),
        Err(StakingError::PoolNotFound.into())
    );
}

#[test]
fn test_first_deposit_over_cap_fails() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(10_000), tokens(10_000));

    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, tokens(4_001)),
        Err(StakingError::CapExceeded.into())
    );
    // Exactly the cap is fine
    assert_eq!(f.deposit_as(f.alice, project_id, 1, tokens(4_000)), Ok(()));
}

#[test]
fn test_repeat_deposit_over_cap_fails() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(10_000), tokens(10_000));

    f.deposit_as(f.alice, project_id, 1, tokens(3_000)).unwrap();
    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, tokens(1_001)),
        Err(StakingError::CapExceeded.into())
    );
    assert_eq!(f.pool.get_amount_staked_by_user_in_pool(project_id, 1, f.alice), tokens(3_000));
}

#[test]
fn test_zero_cap_pool_rejects_every_deposit() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(100), tokens(100));

    assert_eq!(
        f.deposit_as(f.alice, project_id, 0, U256::one()),
        Err(StakingError::CapExceeded.into())
    );
}

#[test]
fn test_cap_is_per_user() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(4_000), tokens(4_000));
    f.fund(f.bob, tokens(4_000), tokens(4_000));

    f.deposit_as(f.alice, project_id, 1, tokens(4_000)).unwrap();
    f.deposit_as(f.bob, project_id, 1, tokens(4_000)).unwrap();

    assert_eq!(f.pool.get_total_amount_staked_in_pool(project_id, 1), tokens(8_000));
}

#[test]
fn test_insufficient_allowance_leaves_state_untouched() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(1_000), tokens(100));

    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, tokens(500)),
        Err(StakingError::InsufficientAllowance.into())
    );

    assert_eq!(f.pool.get_amount_staked_by_user_in_pool(project_id, 1, f.alice), U256::zero());
    assert_eq!(f.pool.get_total_amount_staked_in_pool(project_id, 1), U256::zero());
    assert_eq!(f.pool.get_total_amount_staked_in_project(project_id), U256::zero());
    assert_eq!(f.pool.number_of_stakers(project_id, 1), 0);
    assert_eq!(f.token.balance_of(f.alice), tokens(1_000));
}

#[test]
fn test_insufficient_balance_fails() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(100), tokens(1_000));

    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, tokens(500)),
        Err(StakingError::InsufficientTokenBalance.into())
    );
    assert_eq!(f.pool.number_of_stakers(project_id, 1), 0);
}

#[test]
fn test_deposits_close_after_seven_days() {
    let mut f = Fixture::new();
    let project_id = f.open_project_with_pools();
    f.fund(f.alice, tokens(100), tokens(100));

    f.advance(7 * DAY);
    assert_eq!(
        f.deposit_as(f.alice, project_id, 1, tokens(10)),
        Err(StakingError::StakingClosed.into())
    );
}
