//! The fixed opening transcript a study room ships with.

use crate::Role;

/// `(from, role, body, sent_at)` rows, in arrival order.
pub(crate) const SEED: &[(&str, Role, &str, &str)] = &[
    ("Tran Van Bao Thang", Role::Joiner, "Hello world", "08:20:00"),
    ("Nguyen Thi Mai", Role::Member, "Good morning everyone!", "08:25:00"),
    ("Le Van Duc", Role::Member, "Did you finish the project?", "08:30:00"),
    ("Hoang Minh Anh", Role::Manager, "Yes, I sent it to the client.", "08:35:00"),
    ("Tran Van Bao Thang", Role::Joiner, "Great job, Minh Anh!", "08:40:00"),
    ("Nguyen Thi Mai", Role::Member, "Let's discuss the new task in the meeting.", "08:45:00"),
    ("Le Van Duc", Role::Member, "Sure, I will prepare the slides.", "08:50:00"),
    (
        "Hoang Minh Anh",
        Role::Manager,
        "Please make sure to include the latest updates.",
        "08:55:00",
    ),
    ("Tran Van Bao Thang", Role::Joiner, "When is the meeting?", "09:00:00"),
    ("Nguyen Thi Mai", Role::Member, "It's at 10 AM in the main conference room.", "09:05:00"),
];
