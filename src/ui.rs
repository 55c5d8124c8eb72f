use crate::dashboard::{DashboardState, TaskSlot, WEEK};
use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Sessions,
    Tasks,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Sessions => "/sessions",
            Self::Tasks => "/tasks",
        }
    }

    /// Pages a toggle form may return to; anything else goes home.
    pub fn from_next(next: Option<&str>) -> Self {
        match next.map(str::trim) {
            Some("tasks") => Self::Tasks,
            _ => Self::Home,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Sessions => "sessions",
            Self::Tasks => "tasks",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Home => "ML Dashboard",
            Self::Sessions => "Study Sessions",
            Self::Tasks => "Tasks",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Home => "Personal ML / Dev Dashboard",
            Self::Sessions => "Study Sessions",
            Self::Tasks => "Today&rsquo;s Tasks",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            Self::Home => "Track focus time and tasks for the week.",
            Self::Sessions => "Overview of your focused work blocks for the week.",
            Self::Tasks => "Manage your ML / dev tasks and track completion.",
        }
    }
}

pub fn focus_note(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Customer Churn EDA",
        Weekday::Tue => "Reflex docs + experiments",
        Weekday::Wed => "VisionSense API tests",
        Weekday::Thu => "ML theory / reading",
        Weekday::Fri => "UrbanShift uplift ideas",
        Weekday::Sat => "MLE-Agent refactor",
        Weekday::Sun => "Paper writing / review",
    }
}

pub fn render_page(page: Page, state: &DashboardState) -> String {
    let content = match page {
        Page::Home => format!(
            "{}{}<div class=\"columns\">{}{}</div>",
            kpi_row(state),
            progress_section(state),
            sessions_section(state),
            task_list(state, page),
        ),
        Page::Sessions => sessions_section(state),
        Page::Tasks => task_list(state, page),
    };

    LAYOUT_HTML
        .replace("{{TITLE}}", page.title())
        .replace("{{HEADING}}", page.heading())
        .replace("{{SUBTITLE}}", page.subtitle())
        .replace("{{NAV}}", &nav(page))
        .replace("{{CONTENT}}", &content)
}

fn nav(current: Page) -> String {
    let links: Vec<String> = [
        (Page::Home, "Home"),
        (Page::Sessions, "Sessions"),
        (Page::Tasks, "Tasks"),
    ]
    .into_iter()
    .map(|(page, label)| {
        if page == current {
            format!("<span class=\"current\">{label}</span>")
        } else {
            format!("<a href=\"{}\">{label}</a>", page.path())
        }
    })
    .collect();
    links.join("")
}

fn kpi_card(label: &str, value: &str, subtext: &str) -> String {
    format!(
        "<div class=\"card kpi\"><p class=\"label\">{label}</p>\
         <p class=\"value\">{value}</p><p class=\"muted\">{subtext}</p></div>"
    )
}

fn kpi_row(state: &DashboardState) -> String {
    format!(
        "<section class=\"kpis\">{}{}{}{}</section>",
        kpi_card(
            "Deep-work minutes (week)",
            &state.total_minutes().to_string(),
            &format!("Target: {} mins", state.weekly_goal),
        ),
        kpi_card("Study sessions", &WEEK.len().to_string(), "Mon&ndash;Sun focus blocks"),
        kpi_card("Tasks open", &state.open_tasks().to_string(), "Things left for today"),
        kpi_card("Tasks done", &state.done_tasks().to_string(), "Completed items"),
    )
}

fn progress_section(state: &DashboardState) -> String {
    let pct = state.progress_percent();
    format!(
        "<section class=\"card\" id=\"progress\">\
         <div class=\"row\"><h2>Weekly Focus Progress</h2>\
         <span class=\"muted\" data-progress=\"{pct}\">{pct}% of goal</span></div>\
         <div class=\"bar\"><span style=\"width: {pct}%\"></span></div>\
         <p class=\"muted\">{} / {} minutes logged</p></section>",
        state.total_minutes(),
        state.weekly_goal,
    )
}

fn sessions_section(state: &DashboardState) -> String {
    let rows: String = WEEK
        .iter()
        .map(|day| {
            format!(
                "<li><span class=\"day\">{day}</span>{} min &middot; {}</li>",
                state.minutes_on(*day),
                focus_note(*day),
            )
        })
        .collect();
    format!(
        "<section class=\"card\" id=\"sessions\"><h2>Study Sessions (This Week)</h2>\
         <ul class=\"sessions\">{rows}</ul></section>"
    )
}

fn task_list(state: &DashboardState, page: Page) -> String {
    let rows: String = TaskSlot::ALL
        .iter()
        .map(|task| {
            let done = state.task_done(*task);
            format!(
                "<li><form method=\"post\" action=\"/tasks/{}/toggle?next={}\">\
                 <button type=\"submit\" class=\"task{}\" aria-pressed=\"{done}\">\
                 <span class=\"check\">{}</span>{}</button></form></li>",
                task.number(),
                page.slug(),
                if done { " done" } else { "" },
                if done { "&#10003;" } else { "" },
                task.label(),
            )
        })
        .collect();
    format!(
        "<section class=\"card\" id=\"tasks\">\
         <div class=\"row\"><h2>Today&rsquo;s Tasks</h2>\
         <span class=\"muted\">{} open &middot; {} done</span></div>\
         <ul class=\"tasks\">{rows}</ul></section>",
        state.open_tasks(),
        state.done_tasks(),
    )
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f3f4f1;
      --ink: #22262a;
      --muted: #6b7076;
      --accent: #3b6fe0;
      --done: #2f9e6b;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(34, 38, 42, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 32px 16px 48px;
    }

    .app {
      width: min(1200px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header .eyebrow {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    h1 {
      margin: 4px 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    nav {
      display: flex;
      gap: 18px;
    }

    nav a {
      color: var(--accent);
      text-decoration: none;
    }

    nav .current {
      font-weight: 600;
    }

    .muted {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px 24px;
      display: grid;
      gap: 12px;
    }

    .kpis {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .kpi .label {
      margin: 0;
      color: var(--muted);
      font-weight: 500;
    }

    .kpi .value {
      margin: 0;
      font-size: 1.8rem;
      font-weight: 700;
    }

    .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: #e3e6ea;
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      background: var(--accent);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 16px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .sessions .day {
      display: inline-block;
      width: 60px;
      font-weight: 500;
    }

    .tasks form {
      margin: 0;
    }

    .task {
      display: flex;
      align-items: center;
      gap: 10px;
      width: 100%;
      border: none;
      background: none;
      padding: 4px 0;
      font: inherit;
      color: inherit;
      text-align: left;
      cursor: pointer;
    }

    .check {
      display: inline-grid;
      place-items: center;
      width: 20px;
      height: 20px;
      border: 2px solid var(--muted);
      border-radius: 6px;
      color: #ffffff;
      font-size: 0.8rem;
    }

    .task.done .check {
      background: var(--done);
      border-color: var(--done);
    }

    .task.done {
      color: var(--muted);
      text-decoration: line-through;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <p class="eyebrow">Applied ML Journey</p>
      <h1>{{HEADING}}</h1>
      <p class="muted">{{SUBTITLE}}</p>
    </header>
    <nav>{{NAV}}</nav>
    {{CONTENT}}
  </main>
</body>
</html>
"#;
