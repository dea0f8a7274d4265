use tracing::{debug, info};

use super::{send, CreateRoomRequest, SessionFlowService};
use crate::domain::board::Mark;
use crate::domain::rules::FIRST_MARK;
use crate::domain::session::{MarkAssignment, RoomId, UserId};
use crate::error::HookError;
use crate::host::RoomHost;
use crate::protocol::GameMsg;
use crate::repos::sessions;

impl SessionFlowService {
    /// Pre-create hook: pin the room to two members and stage the initial
    /// session metadata on the request.
    ///
    /// Always succeeds; it only prepares data the host commits later.
    pub fn prepare_room_create(&self, req: &mut CreateRoomRequest) {
        req.max_members = Some(2);
        sessions::stage_new_session(&mut req.metadata, &req.user_id);
        debug!(
            room_id = %req.room_id,
            user_id = %req.user_id,
            "staged new game session on creation request"
        );
    }

    /// Post-create hook: observational only; the pre hook already staged
    /// everything the room needs.
    pub fn room_create_committed(&self, req: &CreateRoomRequest, success: bool) {
        if success {
            info!(room_id = %req.room_id, user_id = %req.user_id, "room created");
        } else {
            debug!(room_id = %req.room_id, "room creation did not commit");
        }
    }

    /// Post-join hook for the second player: seat them, coin-flip the mark
    /// bijection, move to InProgress, persist, and tell each player
    /// privately which mark is theirs and which mark opens.
    pub async fn opponent_join_committed<H: RoomHost>(
        &self,
        host: &H,
        room_id: &RoomId,
        user_id: &UserId,
        success: bool,
    ) -> Result<(), HookError> {
        if !success {
            debug!(room_id = %room_id, user_id = %user_id, "join did not commit; nothing to do");
            return Ok(());
        }

        let mut session = sessions::require(host, room_id).await?;
        session.seat_opponent(user_id.clone())?;

        let marks = {
            let mut rng = self.rng.lock();
            MarkAssignment::coin_flip(
                &mut *rng,
                session.players.first.clone(),
                user_id.clone(),
            )
        };
        session.begin(marks);
        sessions::commit_start(host, room_id, &session).await?;

        let marks = session.require_marks()?;
        info!(
            room_id = %room_id,
            x = %marks.x,
            o = %marks.o,
            first_mark = %FIRST_MARK,
            "both players seated, game started"
        );

        for mark in [Mark::X, Mark::O] {
            let msg = GameMsg::GameStart {
                your_mark: mark,
                first_mark: FIRST_MARK,
            };
            send(host, room_id, marks.holder(mark), &msg).await?;
        }
        Ok(())
    }
}
