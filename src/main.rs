use anyhow::{bail, Context, Result};
use taskgate::app::{AppState, Fetch};
use taskgate::config::Config;
use taskgate::constants::{ERROR_LOGIN, ERROR_LOGOUT, ERROR_REGISTER};
use taskgate::logger;
use taskgate::models::{ProgressStatus, Task};
use taskgate::providers::SliceState;
use taskgate::utils::datetime::format_due;
use taskgate::validation::RegistrationForm;

const USAGE: &str = "\
Usage: taskgate <command> [args]

Commands:
  login <identifier> <password>
  register <username> <email> <password>
  logout
  tasks [--status <completada|en_progreso|sin_iniciar|all> | --category <name>]
  task <id>
  toggle <task id> <subtask index>
  delete <id>
  categories
  add-category <name>
  summary
  notifications
  users
  init-config";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    if command == "init-config" {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;
    let state = AppState::from_config(&config)?;

    match (command.as_str(), &args[1..]) {
        ("login", [identifier, password]) => {
            let response = state
                .auth
                .login(identifier, password)
                .await
                .map_err(|e| anyhow::anyhow!(e.message_or(ERROR_LOGIN)))?;
            println!("Signed in as {}", response.username);
        }
        ("register", [username, email, password]) => {
            let form = RegistrationForm {
                username: username.clone(),
                email: email.clone(),
                password: password.clone(),
                confirm_password: password.clone(),
            };
            state
                .auth
                .register(&form)
                .await
                .map_err(|e| anyhow::anyhow!(e.message_or(ERROR_REGISTER)))?;
            println!("Account created. You can now log in.");
        }
        ("logout", []) => {
            state
                .auth
                .logout()
                .await
                .map_err(|e| anyhow::anyhow!(e.message_or(ERROR_LOGOUT)))?;
            println!("Signed out");
        }
        ("tasks", rest) => {
            let slice = match rest {
                [] => {
                    state.run(&Fetch::Tasks).await;
                    state.tasks.state().await
                }
                [flag, status] if flag == "--status" => {
                    let status: ProgressStatus = status.parse().map_err(anyhow::Error::msg)?;
                    state.run(&Fetch::TasksByProgress(status)).await;
                    state.progress_tasks.state().await
                }
                [flag, category] if flag == "--category" => {
                    state.run(&Fetch::TasksByCategory(category.clone())).await;
                    state.category_tasks.state().await
                }
                _ => bail!(USAGE),
            };
            for task in checked(slice)? {
                print_task_line(&task);
            }
        }
        ("task", [task_id]) => {
            state.run(&Fetch::TaskDetail(task_id.clone())).await;
            match checked(state.task_detail.state().await)? {
                Some(task) => print_task(&task),
                None => println!("Task not found"),
            }
        }
        ("toggle", [task_id, index]) => {
            let index: usize = index.parse().with_context(|| format!("Invalid subtask index '{}'", index))?;
            state.run(&Fetch::TaskDetail(task_id.clone())).await;
            checked(state.task_detail.state().await)?;
            report(state.task_detail.toggle_subtask(task_id, index).await)?;
            if let Some(task) = state.task_detail.task().await {
                print_task(&task);
            }
        }
        ("delete", [task_id]) => {
            report(state.task_detail.delete_task(task_id).await)?;
        }
        ("categories", []) => {
            state.run(&Fetch::Categories).await;
            for category in checked(state.categories.state().await)? {
                println!("{:<25} {:>4} tasks  {}", category.name, category.task_count, category.color);
            }
        }
        ("add-category", [name]) => {
            report(state.categories.create_category(name).await)?;
        }
        ("summary", []) => {
            state.run(&Fetch::Summary).await;
            match checked(state.summary.state().await)? {
                Some(summary) => {
                    println!("Total tasks:  {}", summary.total_tasks);
                    println!("Completed:    {} ({:.0}%)", summary.total_completada, summary.completed_percent());
                    println!("In progress:  {} ({:.0}%)", summary.total_en_progreso, summary.in_progress_percent());
                    println!("Not started:  {} ({:.0}%)", summary.total_sin_iniciar, summary.not_started_percent());
                    println!(
                        "Predicted completion: {:.1}% ({:?})",
                        summary.predicted_completion_rate, summary.trend
                    );
                    for count in &summary.categories {
                        println!("  {:<25} {}", count.category, count.total_tasks);
                    }
                }
                None => println!("No summary available"),
            }
        }
        ("notifications", []) => {
            state.run(&Fetch::Notifications).await;
            for notification in checked(state.notifications.state().await)? {
                if notification.links_task() {
                    println!("{}  (task {})", notification.message, notification.task_id);
                } else {
                    println!("{}", notification.message);
                }
            }
        }
        ("users", []) => {
            state.run(&Fetch::Users).await;
            for user in checked(state.users.state().await)? {
                println!("{}  {}", user.user_id, user.username);
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

/// Turn a slice's stored error into a command failure.
fn checked<T>(slice: SliceState<T>) -> Result<T> {
    match slice.error {
        Some(error) => bail!(error),
        None => Ok(slice.data),
    }
}

fn report(outcome: taskgate::providers::MutationOutcome) -> Result<()> {
    if outcome.success {
        println!("{}", outcome.message);
        Ok(())
    } else {
        bail!(outcome.message)
    }
}

fn print_task_line(task: &Task) {
    let due = task.due_date.as_deref().map(format_due).unwrap_or_default();
    println!("{:<26} {:>3}%  {:<40} {:<15} {}", task.id, task.progress, task.title, task.category, due);
}

fn print_task(task: &Task) {
    println!("{}", task.title);
    println!("  id:        {}", task.id);
    println!("  category:  {}", task.category);
    if let Some(priority) = task.priority {
        println!("  priority:  {:?}", priority);
    }
    println!("  progress:  {}% ({})", task.progress, task.progress_color());
    if let Some(due) = &task.due_date {
        println!("  due:       {}", format_due(due));
    }
    if !task.description.is_empty() {
        println!("\n  {}", task.description);
    }
    if !task.subtasks.is_empty() {
        println!("\n  Subtasks ({}/{}):", task.completed_subtasks(), task.subtasks.len());
        for (index, subtask) in task.subtasks.iter().enumerate() {
            let mark = if subtask.completed { "x" } else { " " };
            println!("  {:>2}. [{}] {}", index, mark, subtask.title);
        }
    }
}
