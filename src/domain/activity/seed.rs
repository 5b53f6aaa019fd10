//! Activities the school offers when the service starts.

use super::{Activity, Roster};

/// Build the startup roster.
pub fn seed_roster() -> Roster {
    Roster::from_activities([
        Activity::new(
            "Basketball Team",
            "Join the school basketball team for training and competitions",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
        ),
        Activity::new(
            "Soccer Club",
            "Participate in soccer practice and matches",
            "Wednesdays, 3:30 PM - 5:30 PM",
            18,
        ),
        Activity::new(
            "Drama Club",
            "Explore acting, stagecraft, and participate in school plays",
            "Mondays, 4:00 PM - 5:30 PM",
            25,
        ),
        Activity::new(
            "Art Workshop",
            "Develop your artistic skills in painting, drawing, and sculpture",
            "Fridays, 3:30 PM - 5:00 PM",
            20,
        ),
        Activity::new(
            "Math Olympiad",
            "Prepare for and compete in mathematics competitions",
            "Thursdays, 3:30 PM - 4:30 PM",
            10,
        ),
        Activity::new(
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Wednesdays, 4:00 PM - 5:00 PM",
            15,
        ),
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    ])
}
