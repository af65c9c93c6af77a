use crate::{
    enums::QueryTarget,
    sys::types::*,
    util::count,
    Gl,
};

/// Query objects.
///
/// The `get_query_object*` readers return the value directly and expect no
/// buffer to be bound to `QUERY_BUFFER`; use the `get_query_buffer_object*`
/// variants to write results into a buffer.
impl Gl {
    pub fn begin_query(&self, target: QueryTarget, id: GLuint) {
        unsafe { self.raw.BeginQuery(target.into(), id) }
    }

    pub fn begin_query_indexed(&self, target: QueryTarget, index: GLuint, id: GLuint) {
        unsafe { self.raw.BeginQueryIndexed(target.into(), index, id) }
    }

    pub fn create_queries(&self, target: QueryTarget, ids: &mut [GLuint]) {
        unsafe { self.raw.CreateQueries(target.into(), count(ids), ids.as_mut_ptr()) }
    }

    pub fn delete_queries(&self, ids: &[GLuint]) {
        unsafe { self.raw.DeleteQueries(count(ids), ids.as_ptr()) }
    }

    pub fn end_query(&self, target: QueryTarget) {
        unsafe { self.raw.EndQuery(target.into()) }
    }

    pub fn end_query_indexed(&self, target: QueryTarget, index: GLuint) {
        unsafe { self.raw.EndQueryIndexed(target.into(), index) }
    }

    pub fn gen_queries(&self, ids: &mut [GLuint]) {
        unsafe { self.raw.GenQueries(count(ids), ids.as_mut_ptr()) }
    }

    pub fn gen_query(&self) -> GLuint {
        let mut id = 0;
        self.gen_queries(std::slice::from_mut(&mut id));
        id
    }

    pub fn get_query_buffer_objecti64v(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: GLintptr,
    ) {
        unsafe { self.raw.GetQueryBufferObjecti64v(id, buffer, pname, offset) }
    }

    pub fn get_query_buffer_objectiv(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: GLintptr,
    ) {
        unsafe { self.raw.GetQueryBufferObjectiv(id, buffer, pname, offset) }
    }

    pub fn get_query_buffer_objectui64v(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: GLintptr,
    ) {
        unsafe { self.raw.GetQueryBufferObjectui64v(id, buffer, pname, offset) }
    }

    pub fn get_query_buffer_objectuiv(
        &self,
        id: GLuint,
        buffer: GLuint,
        pname: GLenum,
        offset: GLintptr,
    ) {
        unsafe { self.raw.GetQueryBufferObjectuiv(id, buffer, pname, offset) }
    }

    pub fn get_query_indexediv(&self, target: QueryTarget, index: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe {
            self.raw
                .GetQueryIndexediv(target.into(), index, pname, &mut value)
        };
        value
    }

    pub fn get_query_objecti64v(&self, id: GLuint, pname: GLenum) -> GLint64 {
        let mut value = 0;
        unsafe { self.raw.GetQueryObjecti64v(id, pname, &mut value) };
        value
    }

    pub fn get_query_objectiv(&self, id: GLuint, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetQueryObjectiv(id, pname, &mut value) };
        value
    }

    pub fn get_query_objectui64v(&self, id: GLuint, pname: GLenum) -> GLuint64 {
        let mut value = 0;
        unsafe { self.raw.GetQueryObjectui64v(id, pname, &mut value) };
        value
    }

    pub fn get_query_objectuiv(&self, id: GLuint, pname: GLenum) -> GLuint {
        let mut value = 0;
        unsafe { self.raw.GetQueryObjectuiv(id, pname, &mut value) };
        value
    }

    pub fn get_queryiv(&self, target: QueryTarget, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { self.raw.GetQueryiv(target.into(), pname, &mut value) };
        value
    }

    pub fn is_query(&self, id: GLuint) -> bool {
        unsafe { self.raw.IsQuery(id) != 0 }
    }

    /// Records the GPU timestamp into `id`. `target` must be
    /// [`QueryTarget::Timestamp`].
    pub fn query_counter(&self, id: GLuint, target: QueryTarget) {
        unsafe { self.raw.QueryCounter(id, target.into()) }
    }
}
