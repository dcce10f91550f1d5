// SPDX-License-Identifier: MIT OR Apache-2.0
//! BSD syscall table for the non-negative numbering space.

use crate::SyscallDesc;

use super::desc;

pub static POSIX_SYSCALLS: &[(i64, SyscallDesc)] = &[
    desc!(0, "syscall"),
    desc!(1, "exit", "void exit(int status)"),
    desc!(2, "fork", "int fork()"),
    desc!(3, "read", "size_t read(int fd, void* cbuf, size_t nbyte)"),
    desc!(4, "write", "size_t write(int fd, void* cbuf, size_t nbyte)"),
    desc!(5, "open", "int open(char* path, int flags, int mode)"),
    desc!(6, "close", "int close(int fd)"),
    desc!(7, "wait4", "int wait4(int pid, void* status, int options, void* rusage)"),
    desc!(8, "creat"),
    desc!(9, "link", "int link(char* path, char* link)"),
    desc!(10, "unlink", "int unlink(char* path)"),
    desc!(11, "execv"),
    desc!(12, "chdir", "int chdir(char* path)"),
    desc!(13, "fchdir", "int fchdir(int fd)"),
    desc!(14, "mknod", "int mknod(char* path, int mode, int dev)"),
    desc!(15, "chmod", "int chmod(char* path, int mode)"),
    desc!(16, "chown", "int chown(char* path, int uid, int gid)"),
    desc!(18, "getfsstat", "int getfsstat(void* buf, int bufsize, int flags)"),
    desc!(19, "lseek"),
    desc!(20, "getpid", "int getpid()"),
    desc!(21, "mount"),
    desc!(22, "umount"),
    desc!(23, "setuid", "int setuid(int uid)"),
    desc!(24, "getuid", "int getuid()"),
    desc!(25, "geteuid", "int geteuid()"),
    desc!(26, "ptrace", "int ptrace(int req, int pid, void* addr, int data)"),
    desc!(27, "recvmsg", "int recvmsg(int s, void* msg, int flags)"),
    desc!(28, "sendmsg", "int sendmsg(int s, void* msg, int flags)"),
    desc!(29, "recvfrom", "int recvfrom(int s, void* buf, size_t len, int flags, void* from, void* fromlenaddr)"),
    desc!(30, "accept", "int accept(int s, void* name, void* anamelen)"),
    desc!(31, "getpeername", "int getpeername(int fdes, void* asa, void* alen)"),
    desc!(32, "getsockname", "int getsockname(int fdes, void* asa, void* alen)"),
    desc!(33, "access", "int access(char* path, int flags)"),
    desc!(34, "chflags", "int chflags(char*  path, int flags)"),
    desc!(35, "fchflags", "int fchflags(int fd, int flags)"),
    desc!(36, "sync", "int sync()"),
    desc!(37, "kill", "int kill(int pid, int signum, int posix)"),
    desc!(38, "stat"),
    desc!(39, "getppid", "int getppid()"),
    desc!(40, "lstat"),
    desc!(41, "dup", "int dup(uint fd)"),
    desc!(42, "pipe", "int pipe()"),
    desc!(43, "getegid", "int getegid()"),
    desc!(44, "profil", "int profil(void* bufbase, size_t bufsize, ulong pcoffset, uint pcscale)"),
    desc!(45, "ktrace"),
    desc!(46, "sigaction", "int sigaction(int signum, void* nsa, void* osa)"),
    desc!(47, "getgid", "int getgid()"),
    desc!(48, "sigprocmask", "int sigprocmask(int how, void* mask, void* omask)"),
    desc!(49, "getlogin", "int getlogin(char* namebuf, uint namelen)"),
    desc!(50, "setlogin", "int setlogin(char* namebuf)"),
    desc!(51, "acct", "int acct(char* path)"),
    desc!(52, "sigpending", "int sigpending(void* osv)"),
    desc!(53, "sigaltstack", "int sigaltstack(void* nss, void* oss)"),
    desc!(54, "ioctl", "int ioctl(int fd, ulong com, void* data)"),
    desc!(55, "reboot", "int reboot(int opt, char* command)"),
    desc!(56, "revoke", "int revoke(char* path)"),
    desc!(57, "symlink", "int symlink(char* path, char* link)"),
    desc!(58, "readlink", "int readlink(char* path, char* buf, int count)"),
    desc!(59, "execve", "int execve(char* fname, char** argp, char** envp)"),
    desc!(60, "umask", "int umask(int newmask)"),
    desc!(61, "chroot", "int chroot(char* path)"),
    desc!(62, "fstat", "int fstat(int fildes, void* buf)"),
    desc!(63, "invalid"),
    desc!(64, "getpagesize"),
    desc!(65, "msync", "int msync(void* addr, size_t len, int flags)"),
    desc!(66, "vfork", "int vfork()"),
    desc!(67, "vread"),
    desc!(68, "vwrite"),
    desc!(69, "sbrk"),
    desc!(70, "sstk"),
    desc!(71, "mmap"),
    desc!(72, "vadvise"),
    desc!(73, "munmap", "int munmap(void* addr, size_t len)"),
    desc!(74, "mprotect", "int mprotect(void* addr, size_t len, int prot)"),
    desc!(75, "madvise", "int madvise(void* addr, size_t len, int behav)"),
    desc!(76, "vhangup"),
    desc!(77, "vlimit"),
    desc!(78, "mincore", "int mincore(void* addr, size_t len, void* vec)"),
    desc!(79, "getgroups", "int getgroups(uint gidsetsize, void* gidset)"),
    desc!(80, "setgroups", "int setgroups(uint gidsetsize, void* gidset)"),
    desc!(81, "getpgrp", "int getpgrp()"),
    desc!(82, "setpgid", "int setpgid(int pid, int pgid)"),
    desc!(83, "setitimer", "int setitimer(uint which, void* itv, void* oitv)"),
    desc!(85, "swapon", "int swapon()"),
    desc!(86, "getitimer", "int getitimer(uint which, void* itv)"),
    desc!(89, "getdtablesize", "int getdtablesize()"),
    desc!(90, "dup2", "int dup2(uint from, uint to)"),
    desc!(91, "getdopt"),
    desc!(92, "fcntl", "int fcntl(int fd, int cmd, long arg)"),
    desc!(93, "select", "int select(int nd, uint* in, uint* ou, uint* ex, void* tv)"),
    desc!(95, "fsync", "int fsync(int fd)"),
    desc!(96, "setpriority", "int setpriority(int which, id_t who, int prio)"),
    desc!(97, "socket", "int socket(int domain, int type, int protocol)"),
    desc!(98, "connect", "int connect(int s, char* name, int namelen)"),
    desc!(99, "accept"),
    desc!(100, "getpriority", "int getpriority(int which, int who)"),
    desc!(104, "bind", "int bind(int s, char* name, int namelen)"),
    desc!(105, "setsockopt", "int setsockopt(int s, int level, int name, void* val, size_t valsize)"),
    desc!(106, "listen", "int listen(int s, int backlog)"),
    desc!(111, "sigsuspend", "int sigsuspend(void* sigmask)"),
    desc!(116, "gettimeofday", "int gettimeofday(void* tp, void* tzp)"),
    desc!(117, "getrusage", "int getrusage(int class, void* r)"),
    desc!(118, "getsockopt", "int getsockopt(int s, int level, int name, void* val, void* valsize)"),
    desc!(120, "readv", "int readv(int filedes, void* iov, int iovcnt)"),
    desc!(121, "writev", "int writev(int filedes, void* iov, int iovcnt)"),
    desc!(122, "settimeofday", "int settimeofday(void* tp, void* tzp)"),
    desc!(123, "fchown", "int fchown(int fd, int uid, int gid)"),
    desc!(124, "fchmod", "int fchmod(int fd, int mode)"),
    desc!(126, "setreuid", "int setreuid(int ruid, int euid)"),
    desc!(127, "setregid", "int setregid(int rgid, int egid)"),
    desc!(128, "rename", "int rename(char* from, char* to)"),
    desc!(131, "flock", "int flock(int fd, int how)"),
    desc!(132, "mkfifo", "int mkfifo(char* path, int mode)"),
    desc!(133, "sendto", "int sendto(int s, void* buf, size_t len, void* to, size_t tolen)"),
    desc!(134, "shutdown", "int shutdown(int s, int how)"),
    desc!(135, "socketpair", "int socketpair(int domain, int type, int protocol, void* rsv)"),
    desc!(136, "mkdir", "int mkdir(char* path, int mode)"),
    desc!(137, "rmdir", "int rmdir(char* path)"),
    desc!(138, "utimes", "int utimes(char* path, void* tptr)"),
    desc!(139, "futimes", "int futimes(int fd, void* tptr)"),
    desc!(140, "adjtime", "int adjtime(void* delta, void* olddelta)"),
    desc!(142, "gethostuuid", "int gethostuuid(char* uuid_buf, void* timeoutp)"),
    desc!(147, "setsid", "int setsid()"),
    desc!(151, "getpgid", "int getpgid(int pid)"),
    desc!(152, "setprivexec", "int setprivexec(int flag)"),
    desc!(153, "pread", "size_t pread(int fd, void* buf, size_t nbyte, int offset)"),
    desc!(154, "pwrite", "size_t pwrite(int fd, void* buf, usize_t nbyte, int offset)"),
    desc!(155, "nfssvc", "int nfssvc(int flag, void* argp)"),
    desc!(157, "statfs", "int statfs(char* path, void* buf)"),
    desc!(158, "fstatfs", "int fstatfs(int fd, void* buf)"),
    desc!(159, "unmount", "int unmount(char* path, int flags)"),
    desc!(161, "getfh", "int getfh(char* fname, void* fhp)"),
    desc!(165, "quotactl", "int quotactl(char* path, int cmd, int uid, void* arg)"),
    desc!(167, "mount", "void mount(char* type, char* path, int flags, void* data)"),
    desc!(169, "csops", "void csops(int pid, uint ops, void* useraddr, size_t usersize)"),
    desc!(170, "csops_audittoken"),
    desc!(173, "waitid", "int waitid(void* idtype, int id, siginfo_t *infop, int options)"),
    desc!(180, "kdebug_trace", "int kdebug_trace(int code, int arg1, int arg2, int arg3, int arg4, int arg5)"),
    desc!(181, "setgid", "int setgid(int egid)"),
    desc!(182, "setegid", "int setegid(int egid)"),
    desc!(183, "seteuid", "int seteuid(int euid)"),
    desc!(184, "sigreturn", "int sigreturn(void* uctx, int infostyle)"),
    desc!(185, "chud", "int chud(ulong code, ulong arg1, ulong arg2, ulong arg3, ulong arg4, ulong arg5)"),
    desc!(187, "fdatasync", "int fdatasync(int fd)"),
    desc!(188, "stat", "int stat(char* path, void* sb)"),
    desc!(189, "fstat", "int fstat(int fd, void* sb)"),
    desc!(190, "lstat", "int lstat(char* path, void* sb)"),
    desc!(191, "pathconf", "int pathconf(char* path, int name)"),
    desc!(192, "fpathconf", "int fpathconf(int fd, int name)"),
    desc!(194, "getrlimit", "int getrlimit(uint which, void* rlp)"),
    desc!(195, "setrlimit", "int setrlimit(uint which, void* rlp)"),
    desc!(196, "getdirentries", "int getdirentries(int fd, char* buf, uint count, void* basep)"),
    desc!(197, "mmap", "void mmap(void* addr, size_t len, int prot, int flags, int fd, int pos)"),
    desc!(199, "lseek", "int lseek(int fd, int offset, int whence)"),
    desc!(200, "truncate", "int truncate(char* path, int length)"),
    desc!(201, "ftruncate", "int ftruncate(int fd, int length)"),
    desc!(202, "__sysctl", "int __sysctl(void* name, uint namelen, void* old, void* oldlenp, void* new, size_t newlen)"),
    desc!(203, "mlock", "int mlock(void* addr, size_t len)"),
    desc!(204, "munlock", "int munlock(void* addr, size_t len)"),
    desc!(205, "undelete", "int undelete(char* path)"),
    desc!(216, "mkcomplex", "int mkcomplex(char* path, int mode, ulong type)"),
    desc!(220, "getattrlist", "int getattrlist(char* path, void* alist, void* attributeBuffer, size_t bufferSize, ulong options)"),
    desc!(221, "setattrlist", "int setattrlist(char* path, void* alist, void* attributeBuffer, size_t bufferSize, ulong options)"),
    desc!(222, "getdirentriesattr", "int getdirentriesattr(int fd, void* alist, void* buffer, size_t buffersize, void* count, void* basep, void* newstate, ulong options)"),
    desc!(223, "exchangedata", "int exchangedata(char* path1, char* path2, ulong options)"),
    desc!(225, "searchfs", "int searchfs(char* path, void* sblock, uint* nummatches, uint scriptcode, uint options, void* state)"),
    desc!(226, "delete", "int delete(char* path)"),
    desc!(227, "copyfile", "int copyfile(char* from, char* to, int mode, int flags)"),
    desc!(228, "fgetattrlist", "int fgetattrlist(int fd, attrlist *alist, void* attributeBuffer, size_t bufferSize, ulong options)"),
    desc!(229, "fsetattrlist", "int fsetattrlist(int fd, attrlist *alist, void* attributeBuffer, size_t bufferSize, ulong options)"),
    desc!(230, "poll", "int poll(pollfd *fds, uint nfds, int timeout)"),
    desc!(231, "watchevent", "int watchevent(eventreq *u_req, int u_eventmask)"),
    desc!(232, "waitevent", "int waitevent(eventreq *u_req, timeval *tv)"),
    desc!(233, "modwatch", "int modwatch(eventreq *u_req, int u_eventmask)"),
    desc!(234, "getxattr", "size_t getxattr(char* path, void* attrname, void* value, size_t size, uint position, int options)"),
    desc!(235, "fgetxattr", "size_t fgetxattr(int fd, void* attrname, void* value, size_t size, uint position, int options)"),
    desc!(236, "setxattr", "int setxattr(char* path, void* attrname, void* value, size_t size, uint position, int options)"),
    desc!(237, "fsetxattr", "int fsetxattr(int fd, void* attrname, void* value, size_t size, uint position, int options)"),
    desc!(238, "removexattr", "int removexattr(char* path, void* attrname, int options)"),
    desc!(239, "fremovexattr", "int fremovexattr(int fd, void* a ttrname, int options)"),
    desc!(240, "listxattr", "size_t listxattr(char* path, void* namebuf, size_t bufsize, int options)"),
    desc!(241, "flistxattr", "size_t flistxattr(int fd, char* namebuf, size_t size, int options)"),
    desc!(242, "fsctl", "int fsctl(char* path, ulong cmd, caddr_t data, uint options)"),
    desc!(243, "initgroups", "int initgroups(uint gidsetsize, int* gidset, int gmuid)"),
    desc!(244, "posix_spawn", "int posix_spawn(int* pid, char* path, _posix_spawn_args_desc *adesc, char* *argv, char* *envp)"),
    desc!(245, "ffsctl", "int ffsctl(int fd, ulong cmd, caddr_t data, uint options)"),
    desc!(250, "minherit", "int minherit(void* addr, size_t len, int inherit)"),
    desc!(266, "shm_open", "int shm_open(char* name, int oflag, ...)"),
    desc!(267, "shm_unlink", "int shm_unlink(char* name)"),
    desc!(268, "sem_open", "sem_t *sem_open(char* name, int oflag, ...)"),
    desc!(269, "sem_close", "int sem_close(sem_t *sem)"),
    desc!(270, "sem_unlink", "int sem_unlink(char* name)"),
    desc!(271, "sem_wait", "int sem_wait(sem_t *sem)"),
    desc!(272, "sem_trywait", "int sem_trywait(sem_t *sem)"),
    desc!(273, "sem_post", "int sem_post(sem_t *sem)"),
    desc!(274, "sem_getvalue", "int sem_getvalue(sem_t *sem, int* sval)"),
    desc!(275, "sem_init", "int sem_init(sem_t *sem, int phsared, uint value)"),
    desc!(276, "sem_destroy", "int sem_destroy(sem_t *sem)"),
    desc!(277, "open_extended", "int open_extended(char* path, int flags, int uid, int gid, int mode, void* xsecurity)"),
    desc!(278, "umask_extended", "int umask_extended(int newmask, void* xsecurity)"),
    desc!(279, "stat_extended", "int stat_extended(char* path, void* ub, void* xsecurity, void* xsecurity_size)"),
    desc!(280, "lstat_extended", "int lstat_extended(char* path, void* ub,  void* xsecurity, void* xsecurity_size)"),
    desc!(281, "fstat_extended", "int fstat_extended(int fd, void* ub, void* xsecurity, void* xsecurity_size)"),
    desc!(282, "chmod_extended", "int chmod_extended(char* path, int uid, int gid, int mode, void* xsecurity)"),
    desc!(283, "fchmod_extended", "int fchmod_extended(int fd, int uid, int gid, int mode, void* xsecurity)"),
    desc!(284, "access_extended", "int access_extended(void* entries, size_t size, void* results, int uid)"),
    desc!(285, "settid", "int settid(int uid, int gid)"),
    desc!(286, "gettid", "int gettid(int* uidp, int* gidp)"),
    desc!(287, "setsgroups", "int setsgroups(int setlen, void* guidset)"),
    desc!(288, "getsgroups", "int getsgroups(void* setlen, void* guidset)"),
    desc!(289, "setwgroups", "int setwgroups(int setlen, uint guidset)"),
    desc!(290, "getwgroups", "int getwgroups (int* setlen, uint guidset)"),
    desc!(291, "mkfifo_extended", "int mkfifo_extended(char* path, int uid, int gid, int mode, void* xsecurity)"),
    desc!(292, "mkdir_extended", "int mkdir_extended(char* path, int uid, int gid, int mode, void* xsecurity)"),
    desc!(294, "shared_region_check_np", "int shared_region_check_np(ulong* startaddress)"),
    desc!(296, "vm_pressure_monitor", "int vm_pressure_monitor (int wait_for_pressure, int nsecs_monitored, uint* pages_reclaimed)"),
    desc!(297, "psynch_rw_longrdlock", "uint psynch_rw_longrdlock(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(298, "psynch_rw_yieldwrlock", "uint psynch_rw_yieldwrlock(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(299, "psynch_rw_downgrade", "int psynch_rw_downgrade(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(300, "psynch_rw_upgrade", "uint psynch_rw_upgrade(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(301, "psynch_mutexwait", "uint psynch_mutexwait(void* mutex, uint mgen, uint ugen, ulong tid, uint flags)"),
    desc!(302, "psynch_mutexdrop", "uint psynch_mutexdrop(void* mutex, uint mgen, uint ugen, ulong tid, uint flags)"),
    desc!(303, "psynch_cvbroad", "uint psynch_cvbroad(void* cv, ulong cvlsgen, ulong cvudgen, uint flags, void* mutex, ulong mugen, ulong tid)"),
    desc!(304, "psynch_cvsignal", "uint psynch_cvsignal(void* cv, ulong cvlsgen, uint cvugen, int thread_port, void* mutex, ulong mugen, ulong tid, uint flags)"),
    desc!(305, "psynch_cvwait", "uint psynch_cvwait(void* cv, ulong cvlsgen, uint cvugen, void* mutex, ulong mugen, uint flags, int64_t sec, uint nsec)"),
    desc!(306, "psynch_rw_rdlock", "uint psynch_rw_rdlock(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(307, "psynch_rw_wrlock", "uint psynch_rw_wrlock(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(308, "psynch_rw_unlock", "uint psynch_rw_unlock(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(309, "psynch_rw_unlock2", "uintpsynch_rw_unlock2(void* rwlock, uint lgenval, uint ugenval, uint rw_wc, int flags)"),
    desc!(310, "getsid", "int getsid(int pid)"),
    desc!(311, "settid_with_pid", "int settid_with_pid(int pid, int assume)"),
    desc!(312, "psynch_cvclrprepost", "psynch_cvclrprepost(void* cv, uint cvgen, uint cvugen, uint cvsgen, uint prepocnt, uint preposeq, uint flags)"),
    desc!(313, "aio_fsync", "int aio_fsync(int op, void* aiocbp)"),
    desc!(314, "aio_return", "ssize_t aio_return(aiocb *aiocbp)"),
    desc!(315, "aio_suspend", "int aio_suspend(void* aiocblist, int nent, void* timeoutp)"),
    desc!(316, "aio_cancel", "int aio_cancel(int fd, aiocb *aiocbp)"),
    desc!(317, "aio_error", "int aio_error(aiocb * aiocbp)"),
    desc!(318, "aio_read", "int aio_read(aiocb * aiocbp)"),
    desc!(319, "aio_write", "int aio_write(void* aiocbp)"),
    desc!(320, "lio_listio", "lio_listio(int mode, aiocb *aiocblist[], int nent, sigevent *sigp)"),
    desc!(322, "iopolicysys", "int iopolicysys(int cmd, void* arg)"),
    desc!(323, "process_policy", "int process_policy(int scope, int action, int policy, int policy_subtype, void* attrp, int target_pid, ulong target_threadid)"),
    desc!(324, "mlockall", "int mlockall(int how)"),
    desc!(325, "munlockall", "int munlockall(int how)"),
    desc!(327, "issetugid", "int issetugid()"),
    desc!(328, "__pthread_kill", "int __pthread_kill(int thread_port, int sig)"),
    desc!(329, "__pthread_sigmask", "int __pthread_sigmask(int how, void* set, void* oset)"),
    desc!(330, "__sigwait", "int __sigwait(sigset_t *set, void* sig)"),
    desc!(331, "__disable_threadsignal", "int __disable_threadsignal(int value)"),
    desc!(332, "__pthread_markcancel", "int __pthread_markcancel(int thread_port)"),
    desc!(333, "__pthread_canceled", "int __pthread_canceled(int action)"),
    desc!(334, "__semwait_signal", "int __semwait_signal(int cond_sem, int mutex_sem, int timeout, int relative, int64_t tv_sec, int32_t tv_nsec)"),
    desc!(336, "proc_info", "int proc_info(int callnum, int pid, uint flavor, long arg, void* buffer, int buffersize)"),
    desc!(338, "stat64", "int stat64(char* path, void* buf)"),
    desc!(339, "fstat64", "int fstat64(int fildes, void* buf)"),
    desc!(340, "lstat64", "int lstat64(char* path, void* buf)"),
    desc!(341, "stat64_extended"),
    desc!(342, "lstat64_extended"),
    desc!(343, "fstat64_extended"),
    desc!(344, "getdirentries64", "size_t getdirentries64(int fd, void* buf, user_size_t bufsize, int* position)"),
    desc!(345, "statfs64", "int statfs64(char* path, void* buf)"),
    desc!(346, "fstatfs64", "int fstatfs64(int fd, void* buf)"),
    desc!(347, "getfsstat64", "int getfsstat64(char* buf, int bufsize, int flags)"),
    desc!(348, "__pthread_chdir", "int __pthread_chdir(char* path)"),
    desc!(349, "__pthread_fchdir", "int __pthread_fchdir(int fd)"),
    desc!(350, "audit", "int audit(void* record, int length)"),
    desc!(351, "auditon", "int auditon(int cmd, void* data, int length)"),
    desc!(353, "getauid", "int getauid(au_id_t *auid)"),
    desc!(354, "setauid", "int setauid(au_id_t *auid)"),
    desc!(357, "getaudit_addr", "int getaudit_addr(auditinfo_addr *ai_ad, int length)"),
    desc!(358, "setaudit_addr", "int setaudit_addr(auditinfo_addr *ai_ad, int length)"),
    desc!(359, "auditctl", "int auditctl(char* path)"),
    desc!(360, "bsdthread_create", "void* bsdthread_create(void* func, void* func_arg, void* stack, void* pthread, uint flags)"),
    desc!(361, "bsdthread_terminate", "int bsdthread_terminate(void* stackaddr, size_t freesize, uint port, uint sem)"),
    desc!(362, "kqueue", "int kqueue()"),
    desc!(363, "kevent", "int kevent(int fd, kevent *chglist, int nchanges, kevent *eventlist, int nevents, timespec *timeout)"),
    desc!(364, "lchown", "int lchown(char* path, int owner, int group)"),
    desc!(365, "stack_snapshot", "int stack_snapshot(int pid, void* tracebuf, uint tracebuf_size, uint flags, uint dispatch_offset)"),
    desc!(366, "bsdthread_register", "int bsdthread_register(void* threadstart, void* wqthread, int pthsize, void* dummy_value, void* targetconc_ptr, ulong dispatchqueue_offset)"),
    desc!(367, "workq_open", "int workq_open()"),
    desc!(368, "workq_kernreturn", "int workq_kernreturn(int options, void* item, int affinity, int prio)"),
    desc!(369, "kevent64", "int kevent64(int fd, kevent64_s *changelist, int nchanges, kevent64_s *eventlist, int nevents, unsigned int flags, timespec *timeout)"),
    desc!(370, "__old_semwait_signal", "int __old_semwait_signal(int cond_sem, int mutex_sem, int timeout, int relative, timespec *ts)"),
    desc!(371, "__old_semwait_signal_nocancel", "int __old_semwait_signal_nocancel(int cond_sem, int mutex_sem, int timeout, int relative, timespec *ts)"),
    desc!(372, "thread_selfid", "ulong thread_selfid()"),
    desc!(373, "ledger"),
    desc!(374, "kevent_qos"),
    desc!(375, "kevent_id"),
    desc!(394, "setlcid", "int setlcid(int pid, int lcid)"),
    desc!(395, "getlcid", "int getlcid(int pid)"),
    desc!(396, "read_nocancel", "int read_nocancel(int fd, void* cbuf, user_size_t nbyte)"),
    desc!(397, "write_nocancel", "int write_nocancel(int fd, void* cbuf, user_size_t nbyte)"),
    desc!(398, "open_nocancel", "int open_nocancel(char* path, int flags, int mode)"),
    desc!(399, "close_nocancel", "int close_nocancel(int fd)"),
    desc!(400, "wait4_nocancel", "int wait4_nocancel(int pid, void* status, int options, void* rusage)"),
    desc!(401, "recvmsg_nocancel", "int recvmsg_nocancel(int s, msghdr *msg, int flags)"),
    desc!(402, "sendmsg_nocancel", "int sendmsg_nocancel(int s, caddr_t msg, int flags)"),
    desc!(403, "recvfrom_nocancel", "int recvfrom_nocancel(int s, void* buf, size_t len, int flags, sockaddr *from, int* fromlenaddr)"),
    desc!(404, "accept_nocancel", "int accept_nocancel(int s, caddr_t name, int* anamelen)"),
    desc!(405, "msync_nocancel", "int msync_nocancel(caddr_t addr, size_t len, int flags)"),
    desc!(406, "fcntl_nocancel", "int fcntl_nocancel(int fd, int cmd, long arg)"),
    desc!(407, "select_nocancel", "int select_nocancel(int nd, uint* in, uint* ou, uint* ex, timeval *tv)"),
    desc!(408, "fsync_nocancel", "int fsync_nocancel(int fd)"),
    desc!(409, "connect_nocancel", "int connect_nocancel(int s, caddr_t name, int namelen)"),
    desc!(410, "sigsuspend_nocancel", "int sigsuspend_nocancel(sigset_t mask)"),
    desc!(411, "readv_nocancel", "int readv_nocancel(int fd, iovec *iovp, u_int iovcnt)"),
    desc!(412, "writev_nocancel", "int writev_nocancel(int fd, iovec *iovp, u_int iovcnt)"),
    desc!(413, "sendto_nocancel", "int sendto_nocancel(int s, caddr_t buf, size_t len, int flags, caddr_t to, int tolen)"),
    desc!(414, "pread_nocancel", "int pread_nocancel(int fd, void* buf, user_size_t nbyte, int offset)"),
    desc!(415, "pwrite_nocancel", "int pwrite_nocancel(int fd, void* buf, user_size_t nbyte, int offset)"),
    desc!(416, "waitid_nocancel", "int waitid_nocancel(idtype_t idtype, id_t id, siginfo_t *infop, int options)"),
    desc!(417, "poll_nocancel", "int poll_nocancel(pollfd *fds, u_int nfds, int timeout)"),
    desc!(420, "sem_wait_nocancel", "int sem_wait_nocancel(sem_t *sem)"),
    desc!(421, "aio_suspend_nocancel", "int aio_suspend_nocancel(void* aiocblist, int nent, void* timeoutp)"),
    desc!(422, "__sigwait_nocancel", "int __sigwait_nocancel(void* set, void* sig)"),
    desc!(423, "__semwait_signal_nocancel", "int __semwait_signal_nocancel(int cond_sem, int mutex_sem, int timeout, int relative, int64_t tv_sec, int32_t tv_nsec)"),
    desc!(427, "fsgetpath", "int fsgetpath(void* buf, size_t bufsize, void* fsid, ulong objid)"),
    desc!(428, "audit_session_self", "mach_port_name_t audit_session_self()"),
    desc!(429, "audit_session_join", "int audit_session_join(void* port)"),
    desc!(430, "fileport_makeport", "int fileport_makeport(int fd, void* portnamep)"),
    desc!(431, "fileport_makefd", "int fileport_makefd(void* port)"),
    desc!(432, "audit_session_port", "int audit_session_port(ibt asid, void* portnamep)"),
    desc!(433, "pid_suspend", "int pid_suspend(int pid)"),
    desc!(434, "pid_resume", "int pid_resume(int pid)"),
    desc!(435, "pid_hibernate", "int pid_hibernate(int pid)"),
    desc!(436, "pid_shutdown_sockets", "int pid_shutdown_sockets(int pid, int level)"),
    desc!(438, "shared_region_map_and_slide_np", "int shared_region_map_and_slide_np(int fd, uint count, void* mappings, uint slide, void* slide_start, uint slide_size)"),
    desc!(439, "kas_info", "int kas_info(int selector, void* value, void* size)"),
    desc!(440, "memorystatus_control", "int memorystatus_control(void* p, void* args, void* ret)"),
    desc!(441, "guarded_open_np", "int guarded_open_np(char* path, void* guard, uint guardflags, int flags)"),
    desc!(442, "guarded_close_np", "int guarded_close_np(int fd, void* guard);"),
    desc!(443, "guarded_kqueue_np", "int guarded_kqueue_np(void* guard, uint guardflags)"),
    desc!(444, "change_fdguard_np", "int change_fdguard_np(int fd, void* guard, uint guardflags, void* nguard, uint nguardflags, void* fdflagsp)"),
    desc!(445, "usrctl", "int usrctl(uint flags)"),
    desc!(446, "proc_rlimit_control", "int proc_rlimit_control(int pid, int flavor, void* arg)"),
    desc!(447, "connectx", "int connectx(int socket, void* endpoints, int associd, uint flags, void* iov, uint iovcnt, void* len, void* connid)"),
    desc!(448, "disconnectx", "int disconnectx(int s, int aid, int cid)"),
    desc!(449, "peeloff", "int peeloff(int s, int aid)"),
    desc!(450, "socket_delegate", "int socket_delegate(int domain, int type, int protocol, int epid)"),
    desc!(451, "telemetry"),
    desc!(452, "proc_uuid_policy"),
    desc!(453, "memorystatus_get_level"),
    desc!(454, "system_override"),
    desc!(455, "vfs_purge"),
    desc!(456, "sfi_ctl"),
    desc!(457, "sfi_pidctl"),
    desc!(458, "coalition"),
    desc!(459, "coalition_info"),
    desc!(460, "necp_match_policy"),
    desc!(461, "getattrlistbulk"),
    desc!(462, "clonefileat"),
    desc!(463, "openat"),
    desc!(464, "openat_nocancel"),
    desc!(465, "renameat"),
    desc!(466, "faccessat"),
    desc!(467, "fchmodat"),
    desc!(468, "fchownat"),
    desc!(469, "fstatat"),
    desc!(470, "fstatat64"),
    desc!(471, "linkat"),
    desc!(472, "unlinkat"),
    desc!(473, "readlinkat"),
    desc!(474, "symlinkat"),
    desc!(475, "mkdirat"),
    desc!(476, "getattrlistat"),
    desc!(477, "proc_trace_log"),
    desc!(478, "bsdthread_ctl"),
    desc!(479, "openbyid_np"),
    desc!(480, "recvmsg_x"),
    desc!(481, "sendmsg_x"),
    desc!(482, "thread_selfusage"),
    desc!(483, "csrctl"),
    desc!(484, "guarded_open_dprotected_np"),
    desc!(485, "guarded_write_np"),
    desc!(486, "guarded_pwrite_np"),
    desc!(487, "guarded_writev_np"),
    desc!(488, "renameatx_np"),
    desc!(489, "mremap_encrypted"),
    desc!(490, "netagent_trigger"),
    desc!(491, "stack_snapshot_with_config"),
    desc!(492, "microstackshot"),
    desc!(493, "grab_pgo_data"),
    desc!(494, "persona"),
    desc!(499, "work_interval_ctl"),
    desc!(500, "getentropy"),
    desc!(501, "necp_open"),
    desc!(502, "necp_client_action"),
    desc!(515, "ulock_wait", "int ulock_wait(void* p, void* args, void* retval)"),
    desc!(516, "ulock_wake", "int ulock_wake(void* p, void* args, void* retval)"),
    desc!(517, "fclonefileat"),
    desc!(518, "fs_snapshot"),
    desc!(519, "enosys"),
    desc!(520, "terminate_with_payload"),
    desc!(521, "abort_with_payload"),
    desc!(522, "necp_session_open"),
    desc!(523, "necp_session_action"),
    desc!(524, "setattrlistat"),
    desc!(525, "net_qos_guideline"),
    desc!(526, "fmount"),
    desc!(527, "ntp_adjtime"),
    desc!(528, "ntp_gettime"),
    desc!(529, "os_fault_with_payload"),
    desc!(530, "kqueue_workloop_ctl"),
    desc!(531, "__mach_bridge_remote_time"),
    desc!(532, "coalition_ledger"),
    desc!(533, "log_data"),
    desc!(534, "memorystatus_available_memory"),
    desc!(535, "objc_bp_assist_cfg_np"),
    desc!(536, "shared_region_map_and_slide_2_np"),
    desc!(537, "pivot_root"),
    desc!(538, "task_inspect_for_pid"),
    desc!(539, "task_read_for_pid"),
    desc!(540, "preadv"),
    desc!(541, "pwritev"),
    desc!(542, "preadv_nocancel"),
    desc!(543, "pwritev_nocancel"),
    desc!(544, "ulock_wait2"),
    desc!(545, "proc_info_extended_id"),
    desc!(546, "tracker_action"),
    desc!(547, "debug_syscall_reject"),
    desc!(551, "freadlink"),
    desc!(552, "record_system_event"),
    desc!(553, "mkfifoat"),
    desc!(554, "mknodat"),
    desc!(555, "ungraftdmg"),
    desc!(556, "MAXSYSCALL"),
];
