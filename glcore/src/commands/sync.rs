use crate::{
    flags::SyncFlags,
    sys::{self, types::*},
    Gl,
};

/// Fence sync objects.
impl Gl {
    /// Returns a `SyncStatus` value as a raw `GLenum`.
    pub fn client_wait_sync(&self, sync: GLsync, flags: SyncFlags, timeout: GLuint64) -> GLenum {
        unsafe { self.raw.ClientWaitSync(sync, flags.bits(), timeout) }
    }

    pub fn delete_sync(&self, sync: GLsync) {
        unsafe { self.raw.DeleteSync(sync) }
    }

    /// `condition` must be `SYNC_GPU_COMMANDS_COMPLETE` and `flags` zero in
    /// every current GL version.
    pub fn fence_sync(&self, condition: GLenum, flags: GLbitfield) -> GLsync {
        unsafe { self.raw.FenceSync(condition, flags) }
    }

    /// Inserts a fence that signals once all prior commands complete.
    pub fn fence(&self) -> GLsync {
        self.fence_sync(sys::SYNC_GPU_COMMANDS_COMPLETE, 0)
    }

    /// Every sync parameter is a single value.
    pub fn get_synciv(&self, sync: GLsync, pname: GLenum) -> GLint {
        let mut value = 0;
        let mut length = 0;
        unsafe { self.raw.GetSynciv(sync, pname, 1, &mut length, &mut value) };
        value
    }

    pub fn is_sync(&self, sync: GLsync) -> bool {
        unsafe { self.raw.IsSync(sync) != 0 }
    }

    /// Makes the server wait for `sync`. `flags` must be zero and `timeout`
    /// `TIMEOUT_IGNORED`.
    pub fn wait_sync(&self, sync: GLsync, flags: GLbitfield, timeout: GLuint64) {
        unsafe { self.raw.WaitSync(sync, flags, timeout) }
    }
}
