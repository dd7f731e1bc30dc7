use shared::AssignedTask;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::utils::format_time;
use crate::mock::assigned_tasks;

/// Task table over the fixed demo dataset: filter, search and sort only.
#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let filter = use_state(|| "all".to_string());
    let search = use_state(String::new);
    let sort_by = use_state(|| "deadline".to_string());
    let ascending = use_state(|| true);

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(select.value());
        })
    };
    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let sort_handler = |column: &'static str| {
        let sort_by = sort_by.clone();
        let ascending = ascending.clone();
        Callback::from(move |_: MouseEvent| {
            if *sort_by == column {
                ascending.set(!*ascending);
            } else {
                sort_by.set(column.to_string());
                ascending.set(true);
            }
        })
    };

    let tasks = visible_tasks(&filter, &search, &sort_by, *ascending);

    html! {
        <div class="tasks-page">
            <div class="page-controls">
                <div>
                    <h2>{"Tasks"}</h2>
                    <p class="subtitle">{"Manage and track garbage collection tasks."}</p>
                </div>
                <div class="control-row">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search tasks..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <select class="filter-select" onchange={on_filter}>
                        <option value="all" selected={*filter == "all"}>{"All Status"}</option>
                        <option value="pending" selected={*filter == "pending"}>{"Pending"}</option>
                        <option value="in-progress" selected={*filter == "in-progress"}>{"In Progress"}</option>
                        <option value="done" selected={*filter == "done"}>{"Done"}</option>
                    </select>
                </div>
            </div>

            <div class="panel">
                <h3>{"Task List"}</h3>
                <p class="subtitle">{"View and manage all garbage collection tasks."}</p>
                <table class="log-table">
                    <thead>
                        <tr>
                            <th>{"Task ID"}</th>
                            <th>{"Location"}</th>
                            <th>{"Assigned To"}</th>
                            <th class="sortable" onclick={sort_handler("assignedAt")}>{"Assigned At"}</th>
                            <th class="sortable" onclick={sort_handler("deadline")}>{"Deadline"}</th>
                            <th class="sortable" onclick={sort_handler("priority")}>{"Priority"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            if tasks.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan="7" class="empty-row">
                                            {"No tasks found matching your criteria"}
                                        </td>
                                    </tr>
                                }
                            } else {
                                tasks.iter().map(render_task_row).collect::<Html>()
                            }
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn visible_tasks(filter: &str, search: &str, sort_by: &str, ascending: bool) -> Vec<AssignedTask> {
    let mut tasks: Vec<AssignedTask> = assigned_tasks()
        .into_iter()
        .filter(|task| {
            filter == "all" || task.status.to_lowercase().replace(' ', "-") == filter
        })
        .filter(|task| {
            if search.is_empty() {
                return true;
            }
            let query = search.to_lowercase();
            task.id.to_lowercase().contains(&query)
                || task.location.to_lowercase().contains(&query)
                || task.assigned_to.to_lowercase().contains(&query)
        })
        .collect();

    tasks.sort_by(|a, b| {
        let ordering = match sort_by {
            "priority" => a.priority.cmp(&b.priority),
            "assignedAt" => a.assigned_at.cmp(&b.assigned_at),
            _ => a.deadline.cmp(&b.deadline),
        };
        if ascending { ordering } else { ordering.reverse() }
    });
    tasks
}

fn render_task_row(task: &AssignedTask) -> Html {
    let status_class = match task.status.as_str() {
        "Pending" => "badge badge-pending",
        "In Progress" => "badge badge-in-progress",
        _ => "badge badge-cleaned",
    };
    let priority_class = match task.priority {
        shared::Severity::High | shared::Severity::Critical => "badge badge-priority-high",
        shared::Severity::Medium => "badge badge-priority-medium",
        shared::Severity::Low => "badge badge-priority-low",
    };

    html! {
        <tr key={task.id.clone()}>
            <td>
                <div class="cell-primary">{ &task.id }</div>
                <div class="cell-secondary">{ &task.garbage_id }</div>
            </td>
            <td>{ &task.location }</td>
            <td>{ &task.assigned_to }</td>
            <td>{ format_time(&task.assigned_at) }</td>
            <td>{ format_time(&task.deadline) }</td>
            <td><span class={priority_class}>{ task.priority.to_string() }</span></td>
            <td><span class={status_class}>{ &task.status }</span></td>
        </tr>
    }
}
