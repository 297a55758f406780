//! Scenario generation.
//!
//! This module composes the cost calculator across the fixed allocation
//! strategies to produce the three comparison scenarios returned per
//! optimization request.

use rust_decimal::Decimal;

use crate::config::CostCatalog;
use crate::error::EngineResult;
use crate::models::{AllocationLine, EmploymentMix, EmploymentType, Scenario, ScenarioSet};

use super::strategy::{BALANCED_STRATEGY, COST_EFFECTIVE_STRATEGY, ScenarioStrategy, split_headcount};
use super::{contractor_cost, fte_cost, validate_headcount};

/// Generates the three comparison scenarios for an optimization request.
///
/// With [`EmploymentMix::Both`] the cost-effective and balanced scenarios
/// follow the fixed allocation strategy tables and the current scenario
/// staffs the full headcount as FTEs at the primary location. With a
/// single-type mix, all three scenarios collapse to one allocation of
/// that type at the primary location and are field-for-field equal.
///
/// The generation is pure: identical inputs always produce identical
/// numeric results.
///
/// # Arguments
///
/// * `catalog` - The cost catalog
/// * `role_id` - The job role id
/// * `primary_location_id` - Where the workforce is currently based
/// * `headcount` - Total workers to allocate (must be positive)
/// * `mix` - The employment mix the generator may use
///
/// # Returns
///
/// Returns a [`ScenarioSet`], or an error if either id is unknown or the
/// headcount is not positive.
///
/// # Examples
///
/// ```no_run
/// use workforce_engine::calculation::generate_scenarios;
/// use workforce_engine::config::ConfigLoader;
/// use workforce_engine::models::EmploymentMix;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
/// let set = generate_scenarios(
///     loader.catalog(),
///     "software-engineer",
///     "usa",
///     10,
///     EmploymentMix::Both,
/// )
/// .unwrap();
///
/// assert_eq!(set.current.headcount(), 10);
/// assert!(set.cost_effective.total_cost <= set.current.total_cost);
/// ```
pub fn generate_scenarios(
    catalog: &CostCatalog,
    role_id: &str,
    primary_location_id: &str,
    headcount: i64,
    mix: EmploymentMix,
) -> EngineResult<ScenarioSet> {
    let headcount = validate_headcount(headcount)?;

    // Validate both references up front so every mix reports unknown ids
    // the same way.
    catalog.job_role(role_id)?;
    catalog.location(primary_location_id)?;

    match mix.single_type() {
        Some(employment_type) => {
            let scenario = single_type_scenario(
                catalog,
                role_id,
                primary_location_id,
                headcount,
                employment_type,
            )?;
            Ok(ScenarioSet {
                cost_effective: scenario.clone(),
                balanced: scenario.clone(),
                current: scenario,
            })
        }
        None => Ok(ScenarioSet {
            cost_effective: strategy_scenario(catalog, role_id, &COST_EFFECTIVE_STRATEGY, headcount)?,
            balanced: strategy_scenario(catalog, role_id, &BALANCED_STRATEGY, headcount)?,
            current: current_scenario(catalog, role_id, primary_location_id, headcount)?,
        }),
    }
}

/// Builds one allocation line for `count` workers of `employment_type` at
/// a location.
fn allocation_line(
    catalog: &CostCatalog,
    role_id: &str,
    location_id: &str,
    count: u32,
    employment_type: EmploymentType,
) -> EngineResult<AllocationLine> {
    let breakdown = match employment_type {
        EmploymentType::Fte => fte_cost(catalog, role_id, location_id, i64::from(count))?,
        EmploymentType::Contractor => {
            contractor_cost(catalog, role_id, location_id, i64::from(count))?
        }
    };

    Ok(AllocationLine {
        location: catalog.location(location_id)?.name.clone(),
        employment_type,
        headcount: count,
        unit_cost: breakdown.unit_cost(),
        total_cost: breakdown.total_cost,
    })
}

/// Assembles a scenario from its allocation lines.
///
/// `headcount` is the validated request total, so the average never
/// divides by zero.
fn assemble(
    name: &str,
    description: &str,
    allocations: Vec<AllocationLine>,
    headcount: u32,
) -> Scenario {
    let total_cost: Decimal = allocations.iter().map(|a| a.total_cost).sum();

    Scenario {
        name: name.to_string(),
        allocations,
        total_cost,
        avg_cost_per_employee: total_cost / Decimal::from(headcount),
        description: description.to_string(),
    }
}

/// Builds a scenario from a fixed allocation strategy, omitting lines
/// whose floor-rounded share is zero.
fn strategy_scenario(
    catalog: &CostCatalog,
    role_id: &str,
    strategy: &ScenarioStrategy,
    headcount: u32,
) -> EngineResult<Scenario> {
    let counts = split_headcount(strategy.rules, headcount);

    let mut allocations = Vec::with_capacity(strategy.rules.len());
    for (rule, count) in strategy.rules.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        allocations.push(allocation_line(
            catalog,
            role_id,
            rule.location_id,
            count,
            rule.employment_type,
        )?);
    }

    Ok(assemble(strategy.name, strategy.description, allocations, headcount))
}

/// Builds the baseline scenario: the full headcount as FTEs at the
/// primary location.
fn current_scenario(
    catalog: &CostCatalog,
    role_id: &str,
    primary_location_id: &str,
    headcount: u32,
) -> EngineResult<Scenario> {
    let line = allocation_line(
        catalog,
        role_id,
        primary_location_id,
        headcount,
        EmploymentType::Fte,
    )?;

    Ok(assemble(
        "Current Strategy",
        "Current baseline approach",
        vec![line],
        headcount,
    ))
}

/// Builds the collapsed scenario used when the mix pins a single
/// employment type.
fn single_type_scenario(
    catalog: &CostCatalog,
    role_id: &str,
    primary_location_id: &str,
    headcount: u32,
    employment_type: EmploymentType,
) -> EngineResult<Scenario> {
    let line = allocation_line(
        catalog,
        role_id,
        primary_location_id,
        headcount,
        employment_type,
    )?;

    Ok(assemble(
        "Most Cost-Effective Mix",
        "Optimized for maximum cost savings",
        vec![line],
        headcount,
    ))
}
