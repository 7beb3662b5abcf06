use super::misses::MissTracker;
use super::resolver::Resolver;
use crate::config::DomainSpec;
use crate::types::dialogue::{DialogueRecord, Speaker};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;

/// Why a record could not be localized. A malformed record can be skipped
/// when the run is configured to continue; a table-integrity fault always
/// aborts the run, since every later record would hit the same broken
/// table.
#[derive(Debug)]
pub enum LocalizeError {
    Record(String),
    TableIntegrity(String),
}

impl fmt::Display for LocalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizeError::Record(msg) => write!(f, "{}", msg),
            LocalizeError::TableIntegrity(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for LocalizeError {}

/// One configured domain bound to its resolver.
pub struct DomainLocalizer<'a> {
    pub spec: &'a DomainSpec,
    pub resolver: Resolver<'a>,
}

/// Rewrites one dialogue record in place: goal `info`/`fail_info` values
/// and user-turn dialogue-act slot values are replaced by their Hindi
/// equivalents where the reference table has them. System turns and acts
/// outside the configured domains are never touched. The record keeps its
/// shape; only targeted leaf values change.
pub fn localize_record(
    record: &mut DialogueRecord,
    domains: &[DomainLocalizer],
    misses: &mut MissTracker,
) -> Result<(), LocalizeError> {
    for domain in domains {
        localize_goal(&mut record.goal, domain, misses)?;
    }
    for (turn_index, (speaker, turn)) in record.tagged_turns_mut().enumerate() {
        if speaker != Speaker::User {
            continue;
        }
        let acts = turn.dialog_act.as_mut().ok_or_else(|| {
            LocalizeError::Record(format!("user turn {} has no dialog_act object", turn_index))
        })?;
        localize_acts(acts, turn_index, domains, misses)?;
    }
    Ok(())
}

fn localize_goal(
    goal: &mut Map<String, Value>,
    domain: &DomainLocalizer,
    misses: &mut MissTracker,
) -> Result<(), LocalizeError> {
    let domain_value = match goal.get_mut(&domain.spec.goal_key) {
        Some(value) => value,
        None => return Ok(()),
    };
    let domain_goal = domain_value.as_object_mut().ok_or_else(|| {
        LocalizeError::Record(format!("goal.{} is not an object", domain.spec.goal_key))
    })?;

    for section in ["info", "fail_info"] {
        let section_value = match domain_goal.get_mut(section) {
            Some(value) => value,
            None => continue,
        };
        let entries = section_value.as_object_mut().ok_or_else(|| {
            LocalizeError::Record(format!(
                "goal.{}.{} is not an object",
                domain.spec.goal_key, section
            ))
        })?;
        for (key, value) in entries.iter_mut() {
            let resolved = domain
                .resolver
                .hindi_value(misses, key, value)
                .map_err(LocalizeError::TableIntegrity)?;
            if let Some(hindi) = resolved {
                *value = Value::String(hindi);
            }
        }
    }
    Ok(())
}

fn localize_acts(
    acts: &mut Map<String, Value>,
    turn_index: usize,
    domains: &[DomainLocalizer],
    misses: &mut MissTracker,
) -> Result<(), LocalizeError> {
    for (act_name, slots_value) in acts.iter_mut() {
        // First configured domain whose tag appears in the act name owns
        // the act; others leave it alone.
        let domain = match domains
            .iter()
            .find(|domain| act_name.contains(&domain.spec.act_tag))
        {
            Some(domain) => domain,
            None => continue,
        };

        let slots = slots_value.as_array_mut().ok_or_else(|| {
            LocalizeError::Record(format!(
                "act '{}' in turn {} is not a slot list",
                act_name, turn_index
            ))
        })?;
        for slot in slots.iter_mut() {
            let pair = slot.as_array_mut().ok_or_else(|| {
                LocalizeError::Record(format!(
                    "act '{}' in turn {} has a slot that is not a [key, value] pair",
                    act_name, turn_index
                ))
            })?;
            if pair.len() != 2 {
                return Err(LocalizeError::Record(format!(
                    "act '{}' in turn {} has a slot of length {}",
                    act_name,
                    turn_index,
                    pair.len()
                )));
            }
            let key = pair[0]
                .as_str()
                .ok_or_else(|| {
                    LocalizeError::Record(format!(
                        "act '{}' in turn {} has a non-string slot key",
                        act_name, turn_index
                    ))
                })?
                .to_string();
            let resolved = domain
                .resolver
                .hindi_value(misses, &key, &pair[1])
                .map_err(LocalizeError::TableIntegrity)?;
            if let Some(hindi) = resolved {
                pair[1] = Value::String(hindi);
            }
        }
    }
    Ok(())
}
