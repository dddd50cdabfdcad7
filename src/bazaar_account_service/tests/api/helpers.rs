use bazaar_account_service::AccountService;
use bazaar_adapters::{
    config::{Argon2Settings, test},
    credentials::Argon2Credentials,
    persistence::{
        HashMapAccountImageRepository, HashMapAccountRepository, HashMapTokenIssuer,
        VecCategoryRepository,
    },
};
use bazaar_application::AccountProvisioningService;
use bazaar_core::Category;
use fake::{Fake, faker::internet::en::SafeEmail};
use serde::Serialize;
use serde_json::{Value, json};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub images: HashMapAccountImageRepository,
    pub tokens: HashMapTokenIssuer,
    pub plumbing: Category,
}

impl TestApp {
    pub async fn new() -> Self {
        let plumbing = Category::new("Plumbing");
        let categories =
            VecCategoryRepository::new(vec![plumbing.clone(), Category::new("Electrical")]);
        let images = HashMapAccountImageRepository::new();
        let tokens = HashMapTokenIssuer::new();

        // Cheapest parameters argon2 accepts; hashing cost is not under test here.
        let credentials = Argon2Credentials::from_settings(&Argon2Settings {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();

        let provisioning = AccountProvisioningService::new(
            HashMapAccountRepository::with_unique_emails(),
            categories,
            images.clone(),
            tokens.clone(),
            credentials,
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(AccountService::new(provisioning).run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            images,
            tokens,
            plumbing,
        }
    }

    pub async fn post_sign_up<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/sign-up", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_sign_in<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/sign-in", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn patch_company<Body: Serialize>(
        &self,
        id: &str,
        body: &Body,
    ) -> reqwest::Response {
        self.http_client
            .patch(format!("{}/companies/{}", &self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_company(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/companies/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sign up a fresh company in the Plumbing category and return the session body.
    pub async fn signed_up_company(&self) -> Value {
        let response = self.post_sign_up(&sign_up_body(&random_email())).await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.unwrap()
    }
}

pub fn random_email() -> String {
    SafeEmail().fake()
}

pub fn sign_up_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": "password123",
        "category": "Plumbing",
        "name": "Acme Plumbing",
        "phone": "555-0100"
    })
}
