use shared::{AssignedTask, Severity, StaffMember};

// Roster and task-table data for surfaces the detector has no API for.

pub fn staff_roster() -> Vec<StaffMember> {
    let member = |id: &str, name: &str, role: &str, available: bool| StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        available,
    };
    vec![
        member("1", "John Doe", "Janitor", true),
        member("2", "Jane Smith", "Cleaner", true),
        member("3", "Mike Johnson", "Supervisor", false),
        member("4", "Sarah Williams", "Janitor", true),
    ]
}

pub fn assigned_tasks() -> Vec<AssignedTask> {
    let task = |id: &str,
                garbage_id: &str,
                location: &str,
                assigned_to: &str,
                assigned_at: &str,
                deadline: &str,
                status: &str,
                priority: Severity| AssignedTask {
        id: id.to_string(),
        garbage_id: garbage_id.to_string(),
        location: location.to_string(),
        assigned_to: assigned_to.to_string(),
        assigned_at: assigned_at.to_string(),
        deadline: deadline.to_string(),
        status: status.to_string(),
        priority,
    };

    vec![
        task(
            "TASK-1234",
            "G-001",
            "Downtown, Main Street",
            "John Doe",
            "2026-04-16T10:30:00",
            "2026-04-16T14:30:00",
            "Pending",
            Severity::High,
        ),
        task(
            "TASK-1235",
            "G-002",
            "Westside Park",
            "Jane Smith",
            "2026-04-16T09:15:00",
            "2026-04-16T13:15:00",
            "In Progress",
            Severity::Medium,
        ),
        task(
            "TASK-1236",
            "G-003",
            "East Avenue",
            "Mike Johnson",
            "2026-04-16T08:45:00",
            "2026-04-16T12:45:00",
            "Done",
            Severity::Low,
        ),
        task(
            "TASK-1237",
            "G-004",
            "North Boulevard",
            "Sarah Williams",
            "2026-04-16T11:00:00",
            "2026-04-16T15:00:00",
            "Pending",
            Severity::High,
        ),
        task(
            "TASK-1238",
            "G-005",
            "South Market",
            "David Brown",
            "2026-04-16T10:00:00",
            "2026-04-16T14:00:00",
            "In Progress",
            Severity::Medium,
        ),
        task(
            "TASK-1239",
            "G-006",
            "Central Park",
            "Emily Davis",
            "2026-04-16T09:30:00",
            "2026-04-16T13:30:00",
            "Done",
            Severity::Low,
        ),
    ]
}
