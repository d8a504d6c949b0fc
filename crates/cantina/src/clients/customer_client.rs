//! # Customer Client
//!
//! Provides a high-level API for interacting with the `Customer` actor.
use crate::customer_actor::{
    CustomerAction, CustomerActionResult, CustomerCommand, CustomerCommandResult, CustomerError,
    CustomerQuery, CustomerQueryResult,
};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerProfile, CustomerUpdate};
use async_trait::async_trait;
use cantina_actor::{ActorClient, FrameworkError, ResourceClient};
use chrono::NaiveDateTime;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CustomerError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CustomerError::NotFound(id),
            Err(other) => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    /// Creates an account; a second account with the same email (any case) is a conflict.
    #[instrument(skip(self))]
    pub async fn register(&self, params: CustomerCreate) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        let CustomerCommandResult::Registered(id) = self
            .inner
            .command(CustomerCommand::Register(params))
            .await
            .map_err(Self::map_error)?;
        Ok(id)
    }

    /// Login lookup. Checking the credential digest is up to the caller.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Customer, CustomerError> {
        let CustomerQueryResult::Found(customer) = self
            .inner
            .query(CustomerQuery::ByEmail(email.to_string()))
            .await
            .map_err(Self::map_error)?;
        Ok(customer)
    }

    #[instrument(skip(self))]
    pub async fn profile(&self, id: CustomerId) -> Result<CustomerProfile, CustomerError> {
        self.fetch(id)
            .await?
            .map(|customer| CustomerProfile::from(&customer))
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<CustomerProfile, CustomerError> {
        let customer = self.inner.update(id, update).await.map_err(Self::map_error)?;
        Ok(CustomerProfile::from(&customer))
    }

    #[instrument(skip(self, token))]
    pub async fn issue_reset_token(
        &self,
        id: CustomerId,
        token: String,
        expires_at: NaiveDateTime,
    ) -> Result<(), CustomerError> {
        self.act(id, CustomerAction::IssueResetToken { token, expires_at })
            .await
            .map(|_| ())
    }

    /// Replaces the credential digest if `token` is the stored one and has not expired.
    #[instrument(skip(self, token, credential))]
    pub async fn redeem_reset_token(
        &self,
        id: CustomerId,
        token: String,
        credential: String,
    ) -> Result<(), CustomerError> {
        self.act(id, CustomerAction::RedeemResetToken { token, credential })
            .await
            .map(|_| ())
    }

    async fn act(
        &self,
        id: CustomerId,
        action: CustomerAction,
    ) -> Result<CustomerActionResult, CustomerError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
