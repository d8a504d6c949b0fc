//! [`ActorEntity`] implementation for [`Customer`].

use super::{
    CustomerAction, CustomerActionResult, CustomerCommand, CustomerCommandResult, CustomerError,
    CustomerQuery, CustomerQueryResult,
};
use crate::clock::Clock;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate, ResetToken};
use async_trait::async_trait;
use cantina_actor::{ActorEntity, Store, Transaction, Unsupported};
use std::sync::Arc;

fn validate_name(name: &str) -> Result<String, CustomerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CustomerError::InvalidInput("name is required".into()));
    }
    Ok(name.to_string())
}

fn validate_email(email: &str) -> Result<String, CustomerError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(email.to_string()),
        _ => Err(CustomerError::InvalidInput(format!("invalid email {email:?}"))),
    }
}

fn build(id: CustomerId, params: CustomerCreate) -> Result<Customer, CustomerError> {
    if params.credential.is_empty() {
        return Err(CustomerError::InvalidInput("credential is required".into()));
    }
    Ok(Customer {
        id,
        name: validate_name(&params.name)?,
        email: validate_email(&params.email)?,
        phone: params.phone.trim().to_string(),
        credential: params.credential,
        reset: None,
    })
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = Unsupported;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Query = CustomerQuery;
    type QueryResult = CustomerQueryResult;
    type Command = CustomerCommand;
    type CommandResult = CustomerCommandResult;
    type Context = Arc<dyn Clock>;
    type Error = CustomerError;

    // Accounts are only created through `CustomerCommand::Register`.
    fn from_create_params(_id: CustomerId, params: Unsupported) -> Result<Self, Self::Error> {
        match params {}
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Arc<dyn Clock>,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validate_name(&name)?;
        }
        if let Some(phone) = update.phone {
            self.phone = phone.trim().to_string();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        clock: &Arc<dyn Clock>,
    ) -> Result<CustomerActionResult, Self::Error> {
        match action {
            CustomerAction::IssueResetToken { token, expires_at } => {
                if token.is_empty() {
                    return Err(CustomerError::InvalidInput("empty reset token".into()));
                }
                self.reset = Some(ResetToken { token, expires_at });
                Ok(CustomerActionResult::ResetIssued)
            }
            CustomerAction::RedeemResetToken { token, credential } => {
                let valid = self
                    .reset
                    .as_ref()
                    .is_some_and(|reset| reset.token == token && clock.now() <= reset.expires_at);
                if !valid {
                    return Err(CustomerError::InvalidInput(
                        "reset token is invalid or expired".into(),
                    ));
                }
                if credential.is_empty() {
                    return Err(CustomerError::InvalidInput("credential is required".into()));
                }
                self.credential = credential;
                self.reset = None;
                Ok(CustomerActionResult::CredentialReplaced)
            }
        }
    }

    async fn handle_query(
        store: &Store<Self>,
        query: CustomerQuery,
        _ctx: &Arc<dyn Clock>,
    ) -> Result<CustomerQueryResult, Self::Error> {
        match query {
            CustomerQuery::ByEmail(email) => {
                let email = email.trim();
                store
                    .values()
                    .find(|c| c.email.eq_ignore_ascii_case(email))
                    .cloned()
                    .map(CustomerQueryResult::Found)
                    .ok_or_else(|| CustomerError::NotFound(email.to_string()))
            }
        }
    }

    async fn handle_command<'s>(
        tx: &mut Transaction<'s, Self>,
        command: CustomerCommand,
        _ctx: &Arc<dyn Clock>,
    ) -> Result<CustomerCommandResult, Self::Error> {
        match command {
            CustomerCommand::Register(params) => {
                let email = params.email.trim();
                if tx.values().iter().any(|c| c.email.eq_ignore_ascii_case(email)) {
                    return Err(CustomerError::Conflict(email.to_string()));
                }
                let id = tx.insert_with(|id| build(id, params))?;
                Ok(CustomerCommandResult::Registered(id))
            }
        }
    }
}
