// tests/api_tests.rs

use quiz_service::{config::Config, db, routes, state::AppState};
use serde_json::{Value, json};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    // 1. Fresh in-memory database with migrations applied
    let pool = db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");

    // 2. Create test configuration and state
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
    };

    let state = AppState { pool, config };

    // 3. Create the router with the app state
    let app = routes::create_router(state);

    // 4. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 5. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// POSTs `body` and returns the id at the end of the Location header.
async fn create(client: &reqwest::Client, url: &str, body: Value) -> i64 {
    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);

    let location = response.headers()["location"].to_str().unwrap().to_string();
    location.rsplit('/').next().unwrap().parse().unwrap()
}

struct ScoreQuiz {
    id: i64,
    q1: i64,
    a1: i64,
    q2: i64,
    a2a: i64,
    a2b: i64,
}

/// Quiz "Score Quiz": Q1 (correct A1, wrong A2), Q2 (correct A2b, wrong A2a).
async fn seed_score_quiz(client: &reqwest::Client, address: &str) -> ScoreQuiz {
    let id = create(client, &format!("{}/api/quizzes", address), json!({"title": "Score Quiz"})).await;

    let questions = format!("{}/api/quizzes/{}/questions", address, id);
    let q1 = create(client, &questions, json!({"text": "Q1"})).await;
    let q2 = create(client, &questions, json!({"text": "Q2"})).await;

    let a1 = create(client, &format!("{}/{}/answers", questions, q1), json!({"text": "A1"})).await;
    create(client, &format!("{}/{}/answers", questions, q1), json!({"text": "A2"})).await;
    let a2a = create(client, &format!("{}/{}/answers", questions, q2), json!({"text": "A2a"})).await;
    let a2b = create(client, &format!("{}/{}/answers", questions, q2), json!({"text": "A2b"})).await;

    for (qid, correct) in [(q1, a1), (q2, a2b)] {
        let response = client
            .put(format!("{}/{}", questions, qid))
            .json(&json!({"correctAnswerId": correct}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 204);
    }

    ScoreQuiz { id, q1, a1, q2, a2a, a2b }
}

async fn submit(client: &reqwest::Client, address: &str, quiz_id: i64, answers: Value) -> reqwest::Response {
    client
        .post(format!("{}/api/quizzes/{}/responses", address, quiz_id))
        .json(&json!({ "answers": answers }))
        .send()
        .await
        .expect("Submit failed")
}

#[tokio::test]
async fn unknown_path_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn listing_returns_summaries_only() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let quizzes_url = format!("{}/api/quizzes", address);
    let first = create(&client, &quizzes_url, json!({"title": "This is quiz 123"})).await;
    let question_url = format!("{}/{}/questions", quizzes_url, first);
    create(&client, &question_url, json!({"text": "Nested"})).await;
    create(&client, &quizzes_url, json!({"title": "This is quiz 124"})).await;

    let response = client.get(&quizzes_url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let quizzes: Vec<Value> = response.json().await.unwrap();
    assert_eq!(quizzes.len(), 2);
    for quiz in &quizzes {
        let keys: Vec<&String> = quiz.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "unexpected fields in {}", quiz);
        assert!(quiz.get("questions").is_none());
    }
    assert_eq!(quizzes[0]["title"], "This is quiz 123");
}

#[tokio::test]
async fn create_quiz_returns_location_and_no_body() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/quizzes", address))
        .json(&json!({"title": "This is quiz 999"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert!(location.starts_with("/api/quizzes/"));
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_quiz_fails_validation() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/quizzes", address))
        .json(&json!({"title": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_quiz_returns_aggregate() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;

    let response = client
        .get(format!("{}/api/quizzes/{}", address, quiz.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], quiz.id);
    assert_eq!(body["title"], "Score Quiz");
    assert_eq!(body["links"]["self"], format!("/api/quizzes/{}", quiz.id));
    assert_eq!(body["links"]["questions"], format!("/api/quizzes/{}/questions", quiz.id));

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["id"], quiz.q1);
    assert_eq!(questions[0]["correctAnswerId"], quiz.a1);
    assert_eq!(questions[0]["answers"].as_array().unwrap().len(), 2);
    assert_eq!(questions[1]["id"], quiz.q2);
    assert_eq!(questions[1]["answers"][0]["id"], quiz.a2a);
    assert_eq!(questions[1]["answers"][0]["text"], "A2a");
}

#[tokio::test]
async fn get_missing_quiz_is_404_without_body() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/quizzes/123", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn question_for_missing_quiz_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/quizzes/999/questions", address))
        .json(&json!({"text": "This is a question"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn score_quiz_scenario() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;

    let mut answers = serde_json::Map::new();
    answers.insert(quiz.q1.to_string(), json!(quiz.a1));
    answers.insert(quiz.q2.to_string(), json!(quiz.a2a));
    let response = submit(&client, &address, quiz.id, Value::Object(answers)).await;

    assert_eq!(response.status().as_u16(), 200);
    let result: Value = response.json().await.unwrap();
    assert_eq!(result, json!({"score": 1}));

    let response = submit(&client, &address, quiz.id, json!({})).await;
    let result: Value = response.json().await.unwrap();
    assert_eq!(result["score"], 0);
}

#[tokio::test]
async fn perfect_submission_scores_every_question() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;

    let mut answers = serde_json::Map::new();
    answers.insert(quiz.q1.to_string(), json!(quiz.a1));
    answers.insert(quiz.q2.to_string(), json!(quiz.a2b));
    answers.insert("987654".to_string(), json!(quiz.a1));
    let response = submit(&client, &address, quiz.id, Value::Object(answers)).await;

    let result: Value = response.json().await.unwrap();
    assert_eq!(result["score"], 2);
}

#[tokio::test]
async fn submission_to_missing_quiz_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = submit(&client, &address, 4242, json!({"1": 1})).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn updates_and_deletes_on_missing_rows_are_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;
    let base = format!("{}/api/quizzes/{}", address, quiz.id);

    let response = client
        .put(format!("{}/api/quizzes/777", address))
        .json(&json!({"title": "Nope"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .delete(format!("{}/questions/777", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .put(format!("{}/questions/{}/answers/777", base, quiz.q1))
        .json(&json!({"text": "Nope"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .delete(format!("{}/questions/{}/answers/{}", base, quiz.q1, quiz.a2b))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    assert_eq!(body["questions"][1]["answers"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn pointing_at_another_questions_answer_is_400() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;

    let response = client
        .put(format!("{}/api/quizzes/{}/questions/{}", address, quiz.id, quiz.q1))
        .json(&json!({"correctAnswerId": quiz.a2b}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn rename_and_delete_quiz() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;
    let url = format!("{}/api/quizzes/{}", address, quiz.id);

    let response = client
        .put(&url)
        .json(&json!({"title": "Renamed"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let body: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(body["title"], "Renamed");

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn malformed_submission_is_client_error() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let quiz = seed_score_quiz(&client, &address).await;

    let non_numeric_question = submit(&client, &address, quiz.id, json!({"abc": 1})).await;
    assert!(non_numeric_question.status().is_client_error());

    let non_numeric_answer = submit(&client, &address, quiz.id, json!({"1": "x"})).await;
    assert!(non_numeric_answer.status().is_client_error());
}
