//! Property tests for roster mutation.
//!
//! Random signup/unregister sequences are applied through the command
//! handlers and checked against a plain list model.

use std::sync::Arc;

use proptest::prelude::*;

use mergington_activities::adapters::InMemoryActivityRepository;
use mergington_activities::application::{
    SignUpCommand, SignUpHandler, UnregisterCommand, UnregisterHandler,
};
use mergington_activities::domain::activity::{seed_roster, ActivityError};

const EMAILS: [&str; 5] = [
    "michael@mergington.edu",
    "emma@mergington.edu",
    "alex@mergington.edu",
    "sam@mergington.edu",
    "jo@mergington.edu",
];

#[derive(Debug, Clone)]
enum Op {
    SignUp { activity: usize, email: usize },
    Unregister { activity: usize, email: usize },
}

fn op_strategy(activities: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..activities, 0..EMAILS.len()).prop_map(|(activity, email)| Op::SignUp { activity, email }),
        (0..activities, 0..EMAILS.len())
            .prop_map(|(activity, email)| Op::Unregister { activity, email }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn handlers_agree_with_list_model(ops in prop::collection::vec(op_strategy(9), 0..40)) {
        let names: Vec<String> = seed_roster().names().map(str::to_string).collect();
        let mut model: Vec<Vec<String>> = seed_roster()
            .iter()
            .map(|a| a.participants().to_vec())
            .collect();

        let repo = Arc::new(InMemoryActivityRepository::seeded());
        let sign_up = SignUpHandler::new(repo.clone());
        let unregister = UnregisterHandler::new(repo.clone());
        let rt = runtime();

        for op in ops {
            match op {
                Op::SignUp { activity, email } => {
                    let email = EMAILS[email].to_string();
                    let result = rt.block_on(sign_up.handle(SignUpCommand {
                        activity_name: names[activity].clone(),
                        email: email.clone(),
                    }));
                    let roster = &mut model[activity];
                    if roster.contains(&email) {
                        prop_assert!(
                            matches!(result, Err(ActivityError::AlreadyRegistered { .. })),
                            "expected AlreadyRegistered, got {:?}",
                            result
                        );
                    } else {
                        prop_assert!(result.is_ok());
                        roster.push(email);
                    }
                }
                Op::Unregister { activity, email } => {
                    let email = EMAILS[email].to_string();
                    let result = rt.block_on(unregister.handle(UnregisterCommand {
                        activity_name: names[activity].clone(),
                        email: email.clone(),
                    }));
                    let roster = &mut model[activity];
                    match roster.iter().position(|p| *p == email) {
                        Some(index) => {
                            prop_assert!(result.is_ok());
                            roster.remove(index);
                        }
                        None => prop_assert!(
                            matches!(result, Err(ActivityError::NotRegistered { .. })),
                            "expected NotRegistered, got {:?}",
                            result
                        ),
                    }
                }
            }
        }

        let snapshot = repo.snapshot().unwrap();
        let stored: Vec<Vec<String>> = snapshot
            .iter()
            .map(|a| a.participants().to_vec())
            .collect();
        prop_assert_eq!(stored, model);

        for activity in snapshot.iter() {
            let mut unique = activity.participants().to_vec();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), activity.participants().len());
        }
    }

    #[test]
    fn unknown_activity_never_mutates_roster(name in "[a-z ]{1,20}", email in 0..EMAILS.len()) {
        let repo = Arc::new(InMemoryActivityRepository::seeded());
        prop_assume!(seed_roster().get(&name).is_none());

        let result = runtime().block_on(SignUpHandler::new(repo.clone()).handle(SignUpCommand {
            activity_name: name,
            email: EMAILS[email].to_string(),
        }));

        prop_assert!(
            matches!(result, Err(ActivityError::NotFound { .. })),
            "expected NotFound, got {:?}",
            result
        );
        prop_assert_eq!(repo.snapshot().unwrap(), seed_roster());
    }
}
