use crate::models::PanelSnapshot;

const EMPTY_READOUT: &str = "--";

pub fn render_index(panel: &PanelSnapshot) -> String {
    INDEX_HTML
        .replace("{{HEATER_CLASS}}", marker_class(panel, "tempButton"))
        .replace("{{BUBBLES_CLASS}}", marker_class(panel, "bubblesButton"))
        .replace("{{FLOW_CLASS}}", marker_class(panel, "flowButton"))
        .replace("{{TEMP}}", readout(panel, "valeurTemperature"))
        .replace("{{T1}}", readout(panel, "T1"))
        .replace("{{T2}}", readout(panel, "T2"))
        .replace("{{FLOW}}", readout(panel, "Flow"))
        .replace(
            "{{UPDATED}}",
            panel.last_render.as_deref().unwrap_or("waiting for controller"),
        )
}

fn marker_class(panel: &PanelSnapshot, id: &str) -> &'static str {
    if panel.markers.get(id).copied().unwrap_or(false) {
        "toggle active"
    } else {
        "toggle"
    }
}

fn readout<'a>(panel: &'a PanelSnapshot, id: &str) -> &'a str {
    match panel.text.get(id).map(String::as_str) {
        Some(text) if !text.is_empty() => text,
        _ => EMPTY_READOUT,
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Spa Panel</title>
  <style>
    :root {
      --bg-1: #e6f4f8;
      --bg-2: #9fd6e6;
      --ink: #1f2d33;
      --accent: #ff7a45;
      --accent-2: #1d6f8c;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(29, 111, 140, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #d4eef5 60%, #f2fafc 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5a6b72;
    }

    .hero {
      background: white;
      border-radius: 22px;
      padding: 24px;
      display: grid;
      gap: 6px;
      text-align: center;
    }

    .hero .value {
      font-size: 3.2rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(29, 111, 140, 0.08);
      display: grid;
      gap: 8px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b8a90;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .actions form {
      margin: 0;
    }

    .toggle {
      width: 100%;
      border: 2px solid var(--accent-2);
      background: white;
      color: var(--accent-2);
      border-radius: 18px;
      padding: 18px;
      font-size: 1.1rem;
      font-weight: 600;
      cursor: pointer;
      transition: background 160ms ease, color 160ms ease;
    }

    .toggle.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    footer {
      font-size: 0.85rem;
      color: #7b8a90;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Spa Panel</h1>
      <p class="subtitle">Water temperature and equipment at a glance.</p>
    </header>

    <section class="hero">
      <span class="label">Water</span>
      <span class="value"><span id="valeurTemperature">{{TEMP}}</span> &deg;C</span>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Sensor 1</span>
        <span class="value" id="T1">{{T1}}</span>
      </div>
      <div class="stat">
        <span class="label">Sensor 2</span>
        <span class="value" id="T2">{{T2}}</span>
      </div>
      <div class="stat">
        <span class="label">Flow</span>
        <span class="value" id="Flow">{{FLOW}}</span>
      </div>
    </section>

    <section class="actions">
      <form method="post" action="/toggle/tempButton">
        <button type="submit" id="tempButton" class="{{HEATER_CLASS}}">Heater</button>
      </form>
      <form method="post" action="/toggle/bubblesButton">
        <button type="submit" id="bubblesButton" class="{{BUBBLES_CLASS}}">Bubbles</button>
      </form>
      <form method="post" action="/toggle/flowButton">
        <button type="submit" id="flowButton" class="{{FLOW_CLASS}}">Flow</button>
      </form>
    </section>

    <footer>Last update: <span id="lastRender">{{UPDATED}}</span></footer>
  </main>

  <script>
    const controls = ['tempButton', 'bubblesButton', 'flowButton'];
    const readouts = ['valeurTemperature', 'T1', 'T2', 'Flow'];

    const apply = (panel) => {
      controls.forEach((id) => {
        document.getElementById(id).classList.toggle('active', Boolean(panel.markers[id]));
      });
      readouts.forEach((id) => {
        document.getElementById(id).innerText = panel.text[id] || '--';
      });
      if (panel.last_render) {
        document.getElementById('lastRender').innerText = panel.last_render;
      }
    };

    const refresh = async () => {
      const res = await fetch('/api/panel');
      if (!res.ok) {
        return;
      }
      apply(await res.json());
    };

    const onButton = async (id) => {
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ control: id })
      });
      if (!res.ok) {
        console.log(await res.text());
        return;
      }
      const body = await res.json();
      console.log(id, body.directive);
      apply(body.panel);
    };

    controls.forEach((id) => {
      document.getElementById(id).form.addEventListener('submit', (event) => {
        event.preventDefault();
        onButton(id).catch((err) => console.log(err));
      });
    });

    setInterval(() => refresh().catch((err) => console.log(err)), 3000);
  </script>
</body>
</html>
"#;
