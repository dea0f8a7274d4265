use tracing::{debug, info};

use super::{send, SessionFlowService};
use crate::domain::board::{Mark, MoveResolution};
use crate::domain::rules;
use crate::domain::session::{RoomId, UserId};
use crate::error::HookError;
use crate::host::RoomHost;
use crate::protocol::GameMsg;
use crate::repos::sessions;

impl SessionFlowService {
    /// Pre-move hook: the sole gate against premature, out-of-turn, and
    /// post-termination submissions.
    ///
    /// Runs before the host commits the move message. Rejection aborts the
    /// pending operation and leaves every piece of state untouched.
    pub async fn prepare_move<H: RoomHost>(
        &self,
        host: &H,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<(), HookError> {
        let session = sessions::require(host, room_id).await?;
        let mark = session.mover_mark(user_id)?;
        debug!(room_id = %room_id, user_id = %user_id, mark = %mark, "move submission validated");
        Ok(())
    }

    /// Post-move hook: apply the committed move, persist the updated state,
    /// and notify the players.
    ///
    /// Turn ownership is re-checked here: a commit racing a concurrent
    /// submission, or a duplicate commit after termination, rejects through
    /// the same status/turn gate instead of being reapplied.
    pub async fn move_committed<H: RoomHost>(
        &self,
        host: &H,
        room_id: &RoomId,
        user_id: &UserId,
        cell_index: u8,
        success: bool,
    ) -> Result<(), HookError> {
        if !success {
            debug!(room_id = %room_id, user_id = %user_id, "move did not commit; nothing to do");
            return Ok(());
        }

        let mut session = sessions::require(host, room_id).await?;
        let mark = session.mover_mark(user_id)?;
        let (row, col) = rules::decode_cell(cell_index)?;
        let resolution = session.record_move(row, col)?;
        sessions::commit_move(host, room_id, &session).await?;

        let marks = session.require_marks()?;
        match resolution {
            MoveResolution::Continue => {
                let next = session.turn;
                info!(
                    room_id = %room_id,
                    user_id = %user_id,
                    cell = cell_index,
                    mark = %mark,
                    next_mark = %next,
                    "move applied, turn passed"
                );
                send(host, room_id, marks.holder(next), &GameMsg::YourTurn).await?;
            }
            MoveResolution::Win(winner) => {
                info!(room_id = %room_id, cell = cell_index, winner = %winner, "game won");
                send(host, room_id, marks.holder(winner), &GameMsg::Win).await?;
                send(host, room_id, marks.holder(winner.other()), &GameMsg::Lose).await?;
            }
            MoveResolution::Draw => {
                info!(room_id = %room_id, cell = cell_index, "game drawn");
                for m in [Mark::X, Mark::O] {
                    send(host, room_id, marks.holder(m), &GameMsg::Draw).await?;
                }
            }
        }
        Ok(())
    }
}
