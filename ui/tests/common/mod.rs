use dyntable_ui::DynamicTableApp;
use dyntable_ui::state::State;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    #[allow(dead_code)]
    mock_server: MockServer,
    harness: Harness<'a, DynamicTableApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, DynamicTableApp> {
        &mut self.harness
    }

    /// App against a mock server answering `GET /users` with the given body.
    #[allow(unused)]
    pub async fn new_app_with_users(users: serde_json::Value) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(&mock_server)
            .await;

        Self::from_server(mock_server)
    }

    /// App against a mock server answering `GET /users` with a bare status.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&mock_server)
            .await;

        Self::from_server(mock_server)
    }

    fn from_server(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let app = DynamicTableApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Ten-user fixture, deliberately out of order so tests observe the sort.
///
/// Names are drawn from the upstream endpoint's dataset.
#[allow(unused)]
pub fn ten_users_json() -> serde_json::Value {
    let names = [
        ("Leanne Graham", "Bret"),
        ("Ervin Howell", "Antonette"),
        ("Clementine Bauch", "Samantha"),
        ("Patricia Lebsack", "Karianne"),
        ("Chelsey Dietrich", "Kamren"),
        ("Dennis Schulist", "Leopoldo_Corkery"),
        ("Kurtis Weissnat", "Elwyn.Skiles"),
        ("Nicholas Runolfsdottir V", "Maxime_Nienow"),
        ("Glenna Reichert", "Delphine"),
        ("Clementina DuBuque", "Moriah.Stanton"),
    ];

    serde_json::Value::Array(
        names
            .iter()
            .enumerate()
            .map(|(i, (name, username))| {
                serde_json::json!({
                    "id": i + 1,
                    "name": name,
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "website": format!("{}.example.com", username.to_lowercase()),
                    // Extra fields the table ignores, as the real payload has.
                    "phone": "1-770-736-8031",
                    "address": { "city": "Gwenborough" }
                })
            })
            .collect(),
    )
}

/// Run frames until the startup fetch settles, bounded so a hang fails fast.
#[allow(unused)]
pub async fn wait_for_load(harness: &mut Harness<'_, DynamicTableApp>) {
    for _ in 0..50 {
        harness.step();
        if !harness.state().state.table.load.is_loading() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    panic!("users fetch did not settle in time");
}
