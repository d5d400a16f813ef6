use super::support::require;
use crate::models::{Alert, AlertDetails, SimpleResponse, Trigger};
use crate::routes;
use crate::{CallContext, Client, EndpointTarget, Origin, ResponseShape, Result, Verb};
use serde_json::Value;

/// Network alert methods
impl Client {
	/// Create a network alert for IPs or netblocks.
	pub async fn create_alert(&self, ctx: &CallContext, alert: &Alert) -> Result<AlertDetails> {
		let target = EndpointTarget::new(Origin::Main, Verb::Post, routes::ALERT).with_json_body(alert)?;
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	pub async fn alert_info(&self, ctx: &CallContext, alert_id: &str) -> Result<AlertDetails> {
		require("alert_id", alert_id)?;

		let target = EndpointTarget::get(routes::alert_info(alert_id));
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// Remove an alert. The API answers with an (empty) JSON object.
	pub async fn delete_alert(&self, ctx: &CallContext, alert_id: &str) -> Result<Value> {
		require("alert_id", alert_id)?;

		let target = EndpointTarget::new(Origin::Main, Verb::Delete, routes::alert(alert_id));
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	/// All active alerts of the account.
	pub async fn list_alerts(&self, ctx: &CallContext) -> Result<Vec<AlertDetails>> {
		self.dispatch(ctx, EndpointTarget::get(routes::ALERT_INFO), ResponseShape::Sequence).await
	}

	/// Triggers that can be enabled on alerts.
	pub async fn list_triggers(&self, ctx: &CallContext) -> Result<Vec<Trigger>> {
		self.dispatch(ctx, EndpointTarget::get(routes::ALERT_TRIGGERS), ResponseShape::Sequence)
			.await
	}

	/// Get notified when `trigger` is met.
	pub async fn enable_alert_trigger(&self, ctx: &CallContext, alert_id: &str, trigger: &str) -> Result<SimpleResponse> {
		self.alert_trigger_action(ctx, Verb::Put, alert_id, trigger).await
	}

	/// Stop notifications for `trigger`.
	pub async fn disable_alert_trigger(
		&self,
		ctx: &CallContext,
		alert_id: &str,
		trigger: &str,
	) -> Result<SimpleResponse> {
		self.alert_trigger_action(ctx, Verb::Delete, alert_id, trigger).await
	}

	/// Ignore `service` (`ip:port`) when it matches `trigger`.
	pub async fn ignore_trigger_service(
		&self,
		ctx: &CallContext,
		alert_id: &str,
		trigger: &str,
		service: &str,
	) -> Result<SimpleResponse> {
		self.trigger_ignore_action(ctx, Verb::Put, alert_id, trigger, service).await
	}

	/// Notify again for `service` on `trigger`.
	pub async fn unignore_trigger_service(
		&self,
		ctx: &CallContext,
		alert_id: &str,
		trigger: &str,
		service: &str,
	) -> Result<SimpleResponse> {
		self.trigger_ignore_action(ctx, Verb::Delete, alert_id, trigger, service).await
	}
}

// region:    --- Support

impl Client {
	async fn alert_trigger_action(
		&self,
		ctx: &CallContext,
		verb: Verb,
		alert_id: &str,
		trigger: &str,
	) -> Result<SimpleResponse> {
		require("alert_id", alert_id)?;
		require("trigger", trigger)?;

		let target = EndpointTarget::new(Origin::Main, verb, routes::alert_trigger(alert_id, trigger));
		self.dispatch(ctx, target, ResponseShape::Record).await
	}

	async fn trigger_ignore_action(
		&self,
		ctx: &CallContext,
		verb: Verb,
		alert_id: &str,
		trigger: &str,
		service: &str,
	) -> Result<SimpleResponse> {
		require("alert_id", alert_id)?;
		require("trigger", trigger)?;
		require("service", service)?;

		let path = routes::alert_trigger_ignore(alert_id, trigger, service);
		let target = EndpointTarget::new(Origin::Main, verb, path);
		self.dispatch(ctx, target, ResponseShape::Record).await
	}
}

// endregion: --- Support
