use httpmock::prelude::*;
use nearby_places::{ClientConfig, PlacesApi, PlacesClient, PlacesError};

fn client_for(server: &MockServer) -> PlacesClient {
    PlacesClient::new(ClientConfig {
        base_url: server.base_url(),
        timeout_ms: 2_000,
    })
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_fetch_and_display() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {
            "id": "1",
            "name": "  Circuito Magico del Agua ",
            "category": "entertainment",
            "distance": 450,
            "infoUrl": "https://en.wikipedia.org/wiki/Park_of_the_Reserve",
            "image": "https://example.com/circuito.jpg"
        },
        {
            "_id": "2",
            "name": "Museo Larco",
            "category": "cultural",
            "distance": "3200",
            "info_url": "https://en.wikipedia.org/wiki/Larco_Museum",
            "imageUrl": "https://example.com/larco.jpg"
        },
        {
            "id": "3",
            "name": "Sin Datos",
            "category": "historic",
            "distance": -10,
            "infoUrl": "https://wikipedia.org"
        }
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/places");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let places = client_for(&server).fetch_all_places().await.unwrap();

    api_mock.assert();
    assert_eq!(places.len(), 3);

    // Names are trimmed on construction.
    assert_eq!(places[0].name(), "Circuito Magico del Agua");
    assert_eq!(places[0].formatted_distance(), "450 m");
    assert_eq!(places[0].category_display(), "Entertainment");
    assert!(places[0].has_image());

    // Alternate field names and numeric-string distances are accepted.
    assert_eq!(places[1].id(), "2");
    assert_eq!(places[1].distance(), 3200.0);
    assert_eq!(places[1].formatted_distance(), "3.2 km");
    assert_eq!(places[1].info_url(), "https://en.wikipedia.org/wiki/Larco_Museum");
    assert!(places[1].has_image());

    // The invalid record is absorbed into a placeholder, not an error.
    assert_eq!(places[2].name(), "Unknown Place");
    assert_eq!(places[2].distance(), 0.0);
    assert_eq!(places[2].category_display(), "Tourism");
}

#[tokio::test]
async fn test_end_to_end_category_filtering() {
    let server = MockServer::start();
    let mock_data = serde_json::json!([
        {"id": "1", "name": "A", "category": "historic", "distance": 100, "infoUrl": "https://wikipedia.org"},
        {"id": "2", "name": "B", "category": "natural", "distance": 200, "infoUrl": "https://wikipedia.org"},
        {"id": "3", "name": "C", "category": "historic", "distance": 300, "infoUrl": "https://wikipedia.org"}
    ]);

    server.mock(|when, then| {
        when.method(GET).path("/places");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(mock_data);
    });

    let client = client_for(&server);

    let all = client.fetch_places_by_category("all").await.unwrap();
    assert_eq!(all.len(), 3);

    let historic = client.fetch_places_by_category("historic").await.unwrap();
    assert_eq!(historic.len(), 2);
    assert!(historic.iter().all(|p| p.category() == "historic"));

    let categories = client.list_categories().await;
    assert_eq!(categories, vec!["historic", "natural"]);
}

#[tokio::test]
async fn test_end_to_end_api_error_messages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/places");
        then.status(404);
    });

    let err = client_for(&server).fetch_all_places().await.unwrap_err();

    assert!(matches!(err, PlacesError::Api { status: 404 }));
    assert!(err.user_friendly_message().contains("not found"));
}

#[tokio::test]
async fn test_end_to_end_category_fallback_when_unreachable() {
    let client = PlacesClient::new(ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_ms: 500,
    })
    .unwrap();

    let categories = client.list_categories().await;

    assert_eq!(
        categories,
        vec![
            "cultural",
            "entertainment",
            "historic",
            "natural",
            "religion",
            "sport",
            "tourism"
        ]
    );
}
