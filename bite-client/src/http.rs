//! HTTP client for the booking and chef-management REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use shared::api::{
    CreateDishRequest, DayDishesResponse, DeleteDishFromDateRequest, MessageResponse,
    WeekDishesResponse,
};
use shared::CalendarDate;

/// HTTP client for making network requests to the remote store
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request with JSON body
    pub async fn delete<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .delete(self.url(path))
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a request, check the status and discard the body.
    ///
    /// For endpoints that answer 204 or with a body that carries no data.
    pub async fn request_unit<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Map non-success statuses to errors
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    body: text,
                }),
            };
        }

        Ok(response)
    }

    // ========== Booking API ==========

    /// Dishes offered during the given ISO week
    pub async fn week_dishes(&self, week: u32) -> ClientResult<WeekDishesResponse> {
        tracing::debug!(week, "fetching week dishes");
        self.get(&format!("booking/week/{week}")).await
    }

    /// Register attendance for a batch of dates
    pub async fn add_attendance(&self, dates: &[CalendarDate]) -> ClientResult<()> {
        tracing::debug!(count = dates.len(), "adding attendance");
        self.post::<MessageResponse, _>("booking/add-attendance/", &dates)
            .await?;
        Ok(())
    }

    /// Withdraw attendance for a batch of dates
    pub async fn remove_attendance(&self, dates: &[CalendarDate]) -> ClientResult<()> {
        tracing::debug!(count = dates.len(), "removing attendance");
        self.delete::<MessageResponse, _>("booking/remove-attendance/", &dates)
            .await?;
        Ok(())
    }

    // ========== Chef Management API ==========

    /// Dishes and booked attendee count for one day
    pub async fn day_dishes(&self, date: CalendarDate) -> ClientResult<DayDishesResponse> {
        tracing::debug!(%date, "fetching day dishes");
        self.get(&format!("chef-management/day-dishes/{date}/"))
            .await
    }

    /// Create a dish and offer it on the given dates
    pub async fn create_dish(&self, request: &CreateDishRequest) -> ClientResult<()> {
        tracing::debug!(dish = %request.dish.dish_name, "creating dish");
        self.post::<MessageResponse, _>("chef-management/create/", request)
            .await?;
        Ok(())
    }

    /// Remove dish-on-date rows by id
    ///
    /// The endpoint answers 204 without a JSON body, so only the status
    /// is checked.
    pub async fn delete_dish_from_date(&self, date_has_dish_ids: &[i64]) -> ClientResult<()> {
        tracing::debug!(count = date_has_dish_ids.len(), "deleting dishes from date");
        let request = DeleteDishFromDateRequest {
            date_has_dish_ids: date_has_dish_ids.to_vec(),
        };
        self.request_unit(
            Method::DELETE,
            "chef-management/delete-dish-from-date/",
            &request,
        )
        .await
    }
}
