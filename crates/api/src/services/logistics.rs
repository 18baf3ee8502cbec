use agritrace_core::error::CoreResult;
use agritrace_core::shipment::ShipmentStatus;
use agritrace_core::types::DbId;
use agritrace_db::models::logistics::LogisticsDetail;
use chrono::Utc;

use super::{CrudService, LogisticsService};

impl LogisticsService {
    /// Mark a shipment as received by stamping its end time with the
    /// current instant.
    ///
    /// Confirming an already delivered shipment overwrites the earlier
    /// end time.
    pub async fn confirm_receipt(&self, id: DbId) -> CoreResult<LogisticsDetail> {
        let current = self.get(id).await?;
        if current.status() == ShipmentStatus::Delivered {
            tracing::warn!(
                id,
                previous_end_time = ?current.end_time,
                "Receipt already confirmed, overwriting end time"
            );
        }

        let mut update = current.to_update();
        update.end_time = Some(Utc::now());
        self.update(&update).await?;

        tracing::info!(id, "Shipment receipt confirmed");
        self.get(id).await
    }
}
